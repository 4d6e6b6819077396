
use game_console::{App, Config, SessionFinalizer};
use game_persistence::{ScoreRepository, ScoreStore};
use game_types::Language;
use std::sync::Arc;
use tempfile::tempdir;
use test_helpers::*;
use tokio::sync::Mutex;

fn english_config() -> Config {
    Config {
        language: Language::English,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_exit_from_menu() {
    let (_dir, finalizer) = create_finalizer(false);
    let mut app = App::new(ScriptedUi::new(script(&[Some("3")])), english_config(), finalizer);

    app.run().await.unwrap();

    assert!(app.ui().printed("1. Start Game"));
    // Menu entry plus the farewell line
    assert_eq!(app.ui().count("Exit\n"), 2);
}

#[tokio::test]
async fn test_invalid_menu_choice_shows_menu_again() {
    let (_dir, finalizer) = create_finalizer(false);
    let mut app = App::new(
        ScriptedUi::new(script(&[Some("7"), Some("3")])),
        english_config(),
        finalizer,
    );

    app.run().await.unwrap();

    assert_eq!(app.ui().count("Input error!"), 1);
    assert_eq!(app.ui().count("Your choice: "), 2);
}

#[tokio::test]
async fn test_language_switch() {
    let (_dir, finalizer) = create_finalizer(false);
    let mut app = App::new(
        ScriptedUi::new(script(&[Some("2"), Some("1"), Some("3")])),
        english_config(),
        finalizer,
    );

    app.run().await.unwrap();

    assert_eq!(app.language(), Language::Russian);
    assert!(app.ui().printed("Язык: русский"));
    assert!(app.ui().printed("3. Выход"));
}

#[tokio::test]
async fn test_full_game_then_exit() {
    let (_dir, finalizer) = create_finalizer(true);
    let mut app = App::new(
        ScriptedUi::new(script(&[
            Some("1"),
            Some("Alice"),
            Some("Bob"),
            Some("education"),
            Some("note"),
            Some("tone"),
            Some("nation"),
            Some(""),
            Some("3"),
        ])),
        english_config(),
        finalizer.clone(),
    );

    app.run().await.unwrap();

    // "nation" needs two n's, the base word has one
    assert!(app.ui().printed("Reason for loss: Cannot be made from base word!"));
    assert_eq!(
        totals(&finalizer).await,
        vec![("Bob".to_string(), 1, 1), ("Alice".to_string(), 1, 0)]
    );
}

#[tokio::test]
async fn test_closed_input_leaves_menu() {
    let (_dir, finalizer) = create_finalizer(false);
    let mut app = App::new(ScriptedUi::new(Vec::new()), english_config(), finalizer);

    app.run().await.unwrap();
    assert_eq!(app.ui().count("Exit\n"), 1);
}

#[tokio::test]
async fn test_unwritable_store_is_fatal() {
    let dir = tempdir().unwrap();
    // Neither the primary file nor a backup can be written here
    let store = ScoreStore::new(dir.path().join("missing").join("scores.json"));
    let scores = Arc::new(Mutex::new(ScoreRepository::new(store)));
    let finalizer = SessionFinalizer::new(scores, false);

    let mut app = App::new(
        ScriptedUi::new(script(&[Some("1"), Some("Alice")])),
        english_config(),
        finalizer,
    );

    let err = app.run().await.unwrap_err();
    assert!(err.is_fatal());
    assert!(app.ui().printed("Error saving results:"));
}
