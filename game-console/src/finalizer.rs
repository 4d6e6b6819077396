//! Exactly-once recording of a game result.
//!
//! The turn loop and the shutdown signal handler both finish games through
//! the same `SessionFinalizer`. The slot lock is held from the moment a game
//! is ended until its result is stored and the `saved` flag is set, so only
//! one of them ever records a given session.

use std::sync::Arc;

use game_core::{Game, TurnOutcome};
use game_persistence::ScoreRepository;
use game_types::{GameError, GameSession, PlayerSlot};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::errors::ControllerError;

#[derive(Default)]
struct SessionSlot {
    game: Option<Game>,
    saved: bool,
}

#[derive(Clone)]
pub struct SessionFinalizer {
    slot: Arc<Mutex<SessionSlot>>,
    scores: Arc<Mutex<ScoreRepository>>,
    checkpoint_games: bool,
}

impl SessionFinalizer {
    pub fn new(scores: Arc<Mutex<ScoreRepository>>, checkpoint_games: bool) -> Self {
        Self {
            slot: Arc::new(Mutex::new(SessionSlot::default())),
            scores,
            checkpoint_games,
        }
    }

    pub fn scores(&self) -> Arc<Mutex<ScoreRepository>> {
        self.scores.clone()
    }

    /// Make `game` the in-flight game, replacing any finished one.
    pub async fn begin(&self, game: Game) {
        let mut slot = self.slot.lock().await;
        let session = game.session().clone();
        *slot = SessionSlot {
            game: Some(game),
            saved: false,
        };
        self.checkpoint(&session).await;
    }

    /// Forget the current game once the caller is done with it.
    pub async fn clear(&self) {
        let mut slot = self.slot.lock().await;
        if let Some(game) = slot.game.as_ref() {
            if game.is_in_progress() {
                debug!(session_id = %game.session().id, "Discarding unfinished game");
            }
        }
        *slot = SessionSlot::default();
    }

    pub async fn session(&self) -> Option<GameSession> {
        let slot = self.slot.lock().await;
        slot.game.as_ref().map(|game| game.session().clone())
    }

    /// Name and seat of the player whose turn it is.
    pub async fn active_turn(&self) -> Result<(String, PlayerSlot), GameError> {
        let slot = self.slot.lock().await;
        match slot.game.as_ref() {
            Some(game) if game.is_in_progress() => {
                Ok((game.active_player().to_string(), game.active_slot()))
            }
            Some(_) => Err(GameError::GameAlreadyCompleted),
            None => Err(GameError::NoGameInProgress),
        }
    }

    pub async fn play_word(&self, word: &str) -> Result<TurnOutcome, ControllerError> {
        self.apply(|game| game.submit_word(word)).await
    }

    pub async fn time_out(&self) -> Result<TurnOutcome, ControllerError> {
        self.apply(Game::time_expired).await
    }

    /// Abrupt termination: the player on turn loses, unless the game is
    /// already over. Returns `None` when there was nothing left to record.
    pub async fn abandon(&self) -> Result<Option<TurnOutcome>, ControllerError> {
        let mut slot = self.slot.lock().await;
        if slot.saved {
            return Ok(None);
        }

        let outcome = match slot.game.as_mut() {
            None => return Ok(None),
            Some(game) if game.is_in_progress() => Some(game.abandon()?),
            Some(_) => None,
        };

        // An ended but unsaved game is retried here as well
        self.record_locked(&mut slot).await?;
        if outcome.is_some() {
            info!("Recorded game interrupted by shutdown");
        }
        Ok(outcome)
    }

    /// Record the current game if it has ended and is not yet saved.
    /// Returns whether this call stored it.
    pub async fn finalize(&self) -> Result<bool, ControllerError> {
        let mut slot = self.slot.lock().await;
        self.record_locked(&mut slot).await
    }

    async fn apply(
        &self,
        step: impl FnOnce(&mut Game) -> Result<TurnOutcome, GameError>,
    ) -> Result<TurnOutcome, ControllerError> {
        let mut slot = self.slot.lock().await;
        let (outcome, session) = {
            let game = slot.game.as_mut().ok_or(GameError::NoGameInProgress)?;
            let outcome = step(game)?;
            (outcome, game.session().clone())
        };

        if outcome.is_game_over() {
            self.record_locked(&mut slot).await?;
        } else {
            self.checkpoint(&session).await;
        }
        Ok(outcome)
    }

    async fn record_locked(&self, slot: &mut SessionSlot) -> Result<bool, ControllerError> {
        if slot.saved {
            return Ok(false);
        }
        let Some(game) = slot.game.as_ref() else {
            return Ok(false);
        };
        if game.is_in_progress() {
            return Ok(false);
        }

        let recorded = self.scores.lock().await.record_outcome(game.session())?;
        slot.saved = true;
        Ok(recorded)
    }

    async fn checkpoint(&self, session: &GameSession) {
        if !self.checkpoint_games {
            return;
        }
        if let Err(e) = self.scores.lock().await.save_in_progress(session) {
            warn!(session_id = %session.id, error = %e, "Failed to save unfinished game");
        }
    }
}
