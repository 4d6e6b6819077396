mod common;

use common::*;
use game_core::{GameEvent, GameEventBus, StatsEngine, TurnOutcome, WordValidator};
use game_types::{GamePhase, Language, LossReason, Player, PlayerSlot};

#[test]
fn test_game_creation() {
    let game = create_standard_game();
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.active_slot(), PlayerSlot::First);
    assert_eq!(game.session().player1_name, "Alice");
    assert_eq!(game.session().player2_name, "Bob");
}

#[test]
fn test_word_validator() {
    let validator = create_english_validator();
    assert!(validator.is_only_letters("hello"));
    assert!(!validator.is_only_letters("hello2"));
    assert!(!validator.is_only_letters("привет"));

    let validator = create_russian_validator();
    assert!(validator.is_only_letters("привет"));
    assert!(WordValidator::can_be_made_from("ОБРАЗОВАНИЕ", "РОЗА"));
    assert!(!WordValidator::can_be_made_from("ОБРАЗОВАНИЕ", "РОЗЫ"));
}

#[test]
fn test_russian_repeat_scenario() {
    let mut game = create_game_with_word(Language::Russian, "программист");

    let outcome = game.submit_word("том").unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Accepted {
            word: "том".to_string(),
            next_player: "Bob".to_string(),
        }
    );

    let outcome = game.submit_word("том").unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Lost {
            loser: "Bob".to_string(),
            winner: "Alice".to_string(),
            reason: LossReason::WordAlreadyUsed,
        }
    );
    assert!(game.session().was_won_by("Alice"));
}

#[test]
fn test_alternation_returns_to_first_player() {
    let mut game = create_standard_game();
    play_accepted_words(&mut game, &["cat"]);
    assert_eq!(game.active_player(), "Bob");
    play_accepted_words(&mut game, &["dot"]);
    assert_eq!(game.active_player(), "Alice");
}

#[test]
fn test_events_for_a_short_game() {
    let collector = EventCollector::new();
    let mut bus = GameEventBus::new();
    bus.add_handler(Box::new(collector.clone()));

    let mut game = create_standard_game();
    let session_id = game.session().id;
    bus.publish(GameEvent::GameStarted {
        session_id,
        base_word: game.session().base_word.clone(),
        players: ("Alice".to_string(), "Bob".to_string()),
    });

    if let TurnOutcome::Lost { winner, loser, reason } = game.time_expired().unwrap() {
        bus.publish(GameEvent::GameEnded {
            session_id,
            winner,
            loser,
            reason: reason.to_string(),
        });
    }

    assert_eq!(collector.event_count(), 2);
    assert!(matches!(
        collector.get_events().last(),
        Some(GameEvent::GameEnded { winner, .. }) if winner == "Bob"
    ));
}

#[test]
fn test_stats_from_history() {
    let history = vec![
        finished_session("Alice", "Bob", "Alice"),
        finished_session("Bob", "Alice", "Alice"),
        finished_session("Alice", "Bob", "Bob"),
    ];
    let (alice, bob) = StatsEngine::head_to_head(&history, "alice", "bob");
    assert_eq!((alice.games_played, alice.wins), (3, 2));
    assert_eq!((bob.games_played, bob.wins), (3, 1));

    let mut alice_total = Player::new("Alice");
    alice_total.add_game(true);
    let board = StatsEngine::leaderboard(&[Player::new("Bob"), alice_total]);
    assert_eq!(board[0].name, "Alice");
}
