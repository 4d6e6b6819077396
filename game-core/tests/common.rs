#![allow(dead_code)]

use game_core::{Game, GameEvent, GameEventHandler, TurnOutcome, WordValidator};
use game_types::{GameSession, Language};
use std::sync::{Arc, Mutex};

pub fn create_english_validator() -> WordValidator {
    WordValidator::new(Language::English)
}

pub fn create_russian_validator() -> WordValidator {
    WordValidator::new(Language::Russian)
}

/// Creates a game with a specific base word
pub fn create_game_with_word(language: Language, word: &str) -> Game {
    Game::new(WordValidator::new(language), word, "Alice", "Bob").unwrap()
}

/// Creates a standard English test game between Alice and Bob
pub fn create_standard_game() -> Game {
    create_game_with_word(Language::English, "education")
}

/// Submits words in order, asserting every one is accepted
pub fn play_accepted_words(game: &mut Game, words: &[&str]) {
    for word in words {
        let outcome = game.submit_word(word).unwrap();
        assert!(
            matches!(outcome, TurnOutcome::Accepted { .. }),
            "Expected {} to be accepted, got {:?}",
            word,
            outcome
        );
    }
}

/// Builds a finished session with the given winner
pub fn finished_session(player1: &str, player2: &str, winner: &str) -> GameSession {
    let mut session = GameSession::new("education", player1, player2);
    session.winner_name = Some(winner.to_string());
    session.reason = Some("time expired".to_string());
    session
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
