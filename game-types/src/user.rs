use serde::{Deserialize, Serialize};

/// Persistent win/loss record for one named player.
///
/// Names are compared case-insensitively; the stored spelling is whatever
/// was typed the first time the player was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub total_games: u32,
    pub wins: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_games: 0,
            wins: 0,
        }
    }

    /// Count one completed game for this player.
    pub fn add_game(&mut self, won: bool) {
        self.total_games += 1;
        if won {
            self.wins += 1;
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Games played and wins, either globally or restricted to one opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
}

impl From<&Player> for PlayerStats {
    fn from(player: &Player) -> Self {
        PlayerStats {
            name: player.name.clone(),
            games_played: player.total_games,
            wins: player.wins,
        }
    }
}

/// Case-insensitive name equality used everywhere players are looked up.
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
