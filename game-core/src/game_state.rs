use game_types::{GameError, GamePhase, GameSession, LossReason, PlayerSlot, names_match};
use crate::WordValidator;

/// Result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Accepted {
        word: String,
        next_player: String,
    },
    Lost {
        loser: String,
        winner: String,
        reason: LossReason,
    },
}

impl TurnOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnOutcome::Lost { .. })
    }
}

/// Turn state machine for a single game.
///
/// A `Game` only exists once the base word has been accepted, so its phase
/// is `InProgress` until a loss moves it to `Ended`. The session becomes
/// immutable at that point.
#[derive(Debug, Clone)]
pub struct Game {
    session: GameSession,
    validator: WordValidator,
    active: PlayerSlot,
    phase: GamePhase,
}

impl Game {
    pub fn new(
        validator: WordValidator,
        base_word: &str,
        player1_name: &str,
        player2_name: &str,
    ) -> Result<Self, GameError> {
        let player1_name = player1_name.trim();
        let player2_name = player2_name.trim();
        if player1_name.is_empty() || player2_name.is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        if names_match(player1_name, player2_name) {
            return Err(GameError::DuplicatePlayerName {
                name: player2_name.to_string(),
            });
        }

        let base_word = base_word.trim();
        if !validator.is_valid_base_word(base_word) {
            return Err(GameError::InvalidBaseWord {
                word: base_word.to_string(),
            });
        }

        Ok(Self {
            session: GameSession::new(base_word, player1_name, player2_name),
            validator,
            active: PlayerSlot::First,
            phase: GamePhase::InProgress,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == GamePhase::InProgress
    }

    pub fn active_slot(&self) -> PlayerSlot {
        self.active
    }

    pub fn active_player(&self) -> &str {
        self.session.player_name(self.active)
    }

    pub fn used_words(&self) -> &[String] {
        &self.session.used_words
    }

    /// Run a submitted word through the turn pipeline for the active player.
    ///
    /// Commands are not handled here; callers dispatch them before
    /// submitting.
    pub fn submit_word(&mut self, word: &str) -> Result<TurnOutcome, GameError> {
        self.ensure_in_progress()?;

        let word = word.trim().to_lowercase();

        if !self.validator.is_only_letters(&word) {
            return Ok(self.end(LossReason::InvalidAlphabet));
        }

        if self.session.has_used(&word) {
            return Ok(self.end(LossReason::WordAlreadyUsed));
        }

        if !WordValidator::can_be_made_from(&self.session.base_word, &word) {
            return Ok(self.end(LossReason::NotFromBaseWord));
        }

        self.session.used_words.push(word.clone());
        self.active = self.active.other();

        Ok(TurnOutcome::Accepted {
            word,
            next_player: self.active_player().to_string(),
        })
    }

    /// The active player did not answer before the turn deadline.
    pub fn time_expired(&mut self) -> Result<TurnOutcome, GameError> {
        self.ensure_in_progress()?;
        Ok(self.end(LossReason::TimeExpired))
    }

    /// The application is going away mid-game; the player on turn loses.
    pub fn abandon(&mut self) -> Result<TurnOutcome, GameError> {
        self.ensure_in_progress()?;
        let player = self.active_player().to_string();
        Ok(self.end(LossReason::ApplicationClosed { player }))
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::GameAlreadyCompleted)
        }
    }

    fn end(&mut self, reason: LossReason) -> TurnOutcome {
        let loser = self.active_player().to_string();
        let winner = self.session.player_name(self.active.other()).to_string();

        self.session.winner_name = Some(winner.clone());
        self.session.reason = Some(reason.to_string());
        self.phase = GamePhase::Ended;

        TurnOutcome::Lost {
            loser,
            winner,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::Language;

    fn create_russian_game() -> Game {
        Game::new(
            WordValidator::new(Language::Russian),
            "программист",
            "Аня",
            "Борис",
        )
        .unwrap()
    }

    fn create_english_game() -> Game {
        Game::new(
            WordValidator::new(Language::English),
            "education",
            "Alice",
            "Bob",
        )
        .unwrap()
    }

    #[test]
    fn test_game_creation() {
        let game = create_russian_game();
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.active_slot(), PlayerSlot::First);
        assert_eq!(game.active_player(), "Аня");
        assert!(game.used_words().is_empty());
        assert!(!game.session().is_finished());
    }

    #[test]
    fn test_game_creation_rejects_bad_base_words() {
        let validator = WordValidator::new(Language::English);

        let result = Game::new(validator, "short", "Alice", "Bob");
        assert_eq!(
            result.unwrap_err(),
            GameError::InvalidBaseWord {
                word: "short".to_string()
            }
        );

        let result = Game::new(validator, "education1", "Alice", "Bob");
        assert!(matches!(result, Err(GameError::InvalidBaseWord { .. })));

        let result = Game::new(validator, "образование", "Alice", "Bob");
        assert!(matches!(result, Err(GameError::InvalidBaseWord { .. })));
    }

    #[test]
    fn test_game_creation_rejects_bad_names() {
        let validator = WordValidator::new(Language::English);

        let result = Game::new(validator, "education", "  ", "Bob");
        assert_eq!(result.unwrap_err(), GameError::EmptyPlayerName);

        let result = Game::new(validator, "education", "Bob", "BOB");
        assert!(matches!(result, Err(GameError::DuplicatePlayerName { .. })));
    }

    #[test]
    fn test_accepted_word_switches_turn() {
        let mut game = create_russian_game();

        let outcome = game.submit_word("том").unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Accepted {
                word: "том".to_string(),
                next_player: "Борис".to_string(),
            }
        );
        assert_eq!(game.active_player(), "Борис");
        assert_eq!(game.used_words(), &["том".to_string()]);
    }

    #[test]
    fn test_turn_alternation_over_long_run() {
        let mut game = create_english_game();
        let words = ["cat", "dot", "tea", "nut", "cut", "note", "dance", "coat", "iota", "den"];

        for (index, word) in words.iter().enumerate() {
            let expected_before = if index % 2 == 0 { "Alice" } else { "Bob" };
            assert_eq!(game.active_player(), expected_before);

            let outcome = game.submit_word(word).unwrap();
            assert!(!outcome.is_game_over(), "{} should be accepted", word);
        }

        assert_eq!(game.active_slot(), PlayerSlot::First);
        assert_eq!(game.used_words().len(), words.len());
    }

    #[test]
    fn test_repeated_word_loses() {
        let mut game = create_russian_game();
        game.submit_word("том").unwrap();

        let outcome = game.submit_word("ТОМ").unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Lost {
                loser: "Борис".to_string(),
                winner: "Аня".to_string(),
                reason: LossReason::WordAlreadyUsed,
            }
        );
        assert_eq!(game.phase(), GamePhase::Ended);
        assert_eq!(game.session().winner_name.as_deref(), Some("Аня"));
        assert_eq!(game.session().reason.as_deref(), Some("word already used"));
    }

    #[test]
    fn test_wrong_alphabet_loses() {
        let mut game = create_russian_game();
        let outcome = game.submit_word("tom").unwrap();

        assert!(matches!(
            outcome,
            TurnOutcome::Lost { reason: LossReason::InvalidAlphabet, .. }
        ));
    }

    #[test]
    fn test_empty_word_loses_for_alphabet() {
        let mut game = create_english_game();
        let outcome = game.submit_word("").unwrap();

        assert!(matches!(
            outcome,
            TurnOutcome::Lost { reason: LossReason::InvalidAlphabet, .. }
        ));
    }

    #[test]
    fn test_letters_not_in_base_word_lose() {
        let mut game = create_english_game();
        game.submit_word("cat").unwrap();

        let outcome = game.submit_word("zebra").unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Lost {
                loser: "Bob".to_string(),
                winner: "Alice".to_string(),
                reason: LossReason::NotFromBaseWord,
            }
        );
    }

    #[test]
    fn test_used_check_runs_before_letter_check() {
        let mut game = create_english_game();
        game.submit_word("cat").unwrap();
        game.submit_word("dot").unwrap();

        let outcome = game.submit_word("cat").unwrap();
        assert!(matches!(
            outcome,
            TurnOutcome::Lost { reason: LossReason::WordAlreadyUsed, .. }
        ));
    }

    #[test]
    fn test_time_expired() {
        let mut game = create_english_game();
        game.submit_word("cat").unwrap();

        let outcome = game.time_expired().unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Lost {
                loser: "Bob".to_string(),
                winner: "Alice".to_string(),
                reason: LossReason::TimeExpired,
            }
        );
        assert_eq!(game.session().reason.as_deref(), Some("time expired"));
    }

    #[test]
    fn test_abandon_blames_active_player() {
        let mut game = create_english_game();

        let outcome = game.abandon().unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Lost {
                loser: "Alice".to_string(),
                winner: "Bob".to_string(),
                reason: LossReason::ApplicationClosed {
                    player: "Alice".to_string()
                },
            }
        );
        assert_eq!(
            game.session().reason.as_deref(),
            Some("application closed during Alice's turn")
        );
    }

    #[test]
    fn test_ended_game_rejects_further_moves() {
        let mut game = create_english_game();
        game.time_expired().unwrap();

        assert_eq!(game.submit_word("cat"), Err(GameError::GameAlreadyCompleted));
        assert_eq!(game.time_expired(), Err(GameError::GameAlreadyCompleted));
        assert_eq!(game.abandon(), Err(GameError::GameAlreadyCompleted));
        assert_eq!(game.session().reason.as_deref(), Some("time expired"));
    }
}
