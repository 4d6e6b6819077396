use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::user::{Player, names_match};

pub type SessionId = Uuid;

/// One game between two named players over a single base word.
///
/// `winner_name` and `reason` stay empty while the game is running and are
/// set together exactly once when it ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    #[serde(default = "Uuid::new_v4")]
    pub id: SessionId,
    pub base_word: String,
    pub player1_name: String,
    pub player2_name: String,
    #[serde(default)]
    pub winner_name: Option<String>,
    #[serde(default)]
    pub used_words: Vec<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl GameSession {
    pub fn new(
        base_word: impl Into<String>,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            base_word: base_word.into(),
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            winner_name: None,
            used_words: Vec::new(),
            reason: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    pub fn player_name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::First => &self.player1_name,
            PlayerSlot::Second => &self.player2_name,
        }
    }

    /// The player who did not win, once the session is finished.
    pub fn loser_name(&self) -> Option<&str> {
        let winner = self.winner_name.as_deref()?;
        if names_match(winner, &self.player1_name) {
            Some(&self.player2_name)
        } else {
            Some(&self.player1_name)
        }
    }

    pub fn was_won_by(&self, name: &str) -> bool {
        self.winner_name
            .as_deref()
            .is_some_and(|winner| names_match(winner, name))
    }

    /// True when both sessions were played on the same base word by the same
    /// seating of players.
    pub fn same_match(&self, other: &GameSession) -> bool {
        names_match(&self.base_word, &other.base_word)
            && names_match(&self.player1_name, &other.player1_name)
            && names_match(&self.player2_name, &other.player2_name)
    }

    /// True when the session was played between `a` and `b`, in either seating.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (names_match(&self.player1_name, a) && names_match(&self.player2_name, b))
            || (names_match(&self.player1_name, b) && names_match(&self.player2_name, a))
    }

    pub fn has_used(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.used_words.iter().any(|used| *used == word)
    }
}

/// Durable document holding every known player and the game history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub history: Vec<GameSession>,
    #[serde(default)]
    pub last_updated: Option<String>, // RFC 3339
}

impl GameData {
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.has_name(name))
    }
}

/// Phase of a started game. Before the base word is accepted there is no
/// game value at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    Ended,
}

/// Seat of a player in a session. Player 1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    First,
    Second,
}

impl PlayerSlot {
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }

    /// 1-based seat number shown to players.
    pub fn number(self) -> u8 {
        match self {
            PlayerSlot::First => 1,
            PlayerSlot::Second => 2,
        }
    }
}

/// Why the active player lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LossReason {
    TimeExpired,
    InvalidAlphabet,
    WordAlreadyUsed,
    NotFromBaseWord,
    ApplicationClosed { player: String },
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossReason::TimeExpired => write!(f, "time expired"),
            LossReason::InvalidAlphabet => write!(f, "invalid alphabet"),
            LossReason::WordAlreadyUsed => write!(f, "word already used"),
            LossReason::NotFromBaseWord => write!(f, "cannot be formed from base word"),
            LossReason::ApplicationClosed { player } => {
                write!(f, "application closed during {}'s turn", player)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl Language {
    /// Parse a short language code such as `ru` or `en`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Some(Language::Russian),
            "en" | "eng" | "english" => Some(Language::English),
            _ => None,
        }
    }
}
