use std::sync::Arc;

use anyhow::{Context, Result};
use game_console::texts::Texts;
use game_console::{App, Config, ConsoleUi, SessionFinalizer};
use game_core::TurnOutcome;
use game_persistence::{ScoreRepository, ScoreStore};
use game_types::Language;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so they stay out of the game prompts
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level)
        .init();

    info!(
        scores_file = %config.scores_file.display(),
        turn_seconds = config.turn_seconds,
        "Starting word game"
    );

    let mut repository = ScoreRepository::new(ScoreStore::new(&config.scores_file));
    if let Err(e) = repository.reload() {
        warn!(error = %e, "Continuing with empty statistics");
        println!("{}", Texts::new(config.language).store_reset(&e));
    }

    let scores = Arc::new(Mutex::new(repository));
    let finalizer = SessionFinalizer::new(scores, config.checkpoint_games);

    tokio::spawn(save_on_shutdown(finalizer.clone(), config.language));

    let mut app = App::new(ConsoleUi::new(), config, finalizer.clone());
    if let Err(e) = app.run().await {
        // Last attempt at a result the failed write left unsaved
        match finalizer.finalize().await {
            Ok(true) => info!("Recorded game result on exit"),
            Ok(false) => {}
            Err(retry) => error!(error = %retry, "Game result could not be recorded"),
        }
        return Err(anyhow::Error::new(e).context("Word game stopped"));
    }

    info!("Word game exited");
    Ok(())
}

/// Wait for an interrupt, record the game in flight as lost by the player
/// on turn, then exit.
async fn save_on_shutdown(finalizer: SessionFinalizer, language: Language) {
    let (signal_name, exit_code) = wait_for_signal().await;
    info!("Received {}, saving game in progress", signal_name);

    let texts = Texts::new(language);
    let exit_code = match finalizer.abandon().await {
        Ok(Some(TurnOutcome::Lost {
            winner,
            loser,
            reason,
        })) => {
            for line in texts.result_banner(&texts.saving_interrupted_game(), &winner, &loser, &reason) {
                println!("{}", line);
            }
            exit_code
        }
        Ok(_) => exit_code,
        Err(e) => {
            error!(error = %e, "Failed to save interrupted game");
            println!("{}", texts.save_failed(&e));
            1
        }
    };

    std::process::exit(exit_code);
}

#[cfg(unix)]
async fn wait_for_signal() -> (&'static str, i32) {
    use tokio::signal::unix::{SignalKind, signal};

    let (mut sigint, mut sigterm) =
        match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
            (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Failed to install signal handlers");
                return std::future::pending().await;
            }
        };

    tokio::select! {
        _ = sigint.recv() => ("SIGINT", 130),
        _ = sigterm.recv() => ("SIGTERM", 143),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> (&'static str, i32) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    ("Ctrl+C", 130)
}
