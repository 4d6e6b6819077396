use std::path::Path;
use std::time::Duration;

use game_core::{Game, GameEvent, GameEventBus, GameEventHandler, TurnOutcome, WordValidator};
use game_persistence::StoreError;
use game_types::{GameCommand, GameError, Language, SessionId, names_match};
use tracing::{debug, warn};

use crate::errors::ControllerError;
use crate::finalizer::SessionFinalizer;
use crate::texts::Texts;
use crate::ui::{TimedInput, UserInterface, normalize_word};

/// How a call to `GameController::play` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    Finished,
    /// Input ended before the game was over; the menu should exit.
    InputClosed,
}

/// Drives one game over a `UserInterface`: registration, base word,
/// turns and the closing summary. Rules live in `game_core::Game`;
/// recording goes through the shared `SessionFinalizer`.
pub struct GameController<'a, U: UserInterface> {
    ui: &'a mut U,
    texts: Texts,
    finalizer: SessionFinalizer,
    validator: WordValidator,
    turn_limit: Duration,
    events: GameEventBus,
}

impl<'a, U: UserInterface> GameController<'a, U> {
    pub fn new(
        ui: &'a mut U,
        finalizer: SessionFinalizer,
        language: Language,
        turn_limit: Duration,
    ) -> Self {
        Self {
            ui,
            texts: Texts::new(language),
            finalizer,
            validator: WordValidator::new(language),
            turn_limit,
            events: GameEventBus::with_tracing(),
        }
    }

    pub fn add_event_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.events.add_handler(handler);
    }

    pub async fn play(&mut self) -> Result<PlayResult, ControllerError> {
        let result = self.run_game().await;
        match &result {
            // An ended game whose result could not be written stays in the
            // slot so a later finalize or shutdown can still record it
            Err(e) if e.is_fatal() => {}
            _ => self.finalizer.clear().await,
        }
        result
    }

    async fn run_game(&mut self) -> Result<PlayResult, ControllerError> {
        let Some((first, second)) = self.register_players().await? else {
            return Ok(PlayResult::InputClosed);
        };
        let Some(game) = self.choose_base_word(&first, &second).await? else {
            return Ok(PlayResult::InputClosed);
        };

        let session_id = game.session().id;
        let base_word = game.session().base_word.clone();
        self.finalizer.begin(game).await;

        self.ui.clear();
        self.ui.write_line(&self.texts.game_started(&base_word));
        self.ui.write_line(&self.texts.available_commands());
        self.events.publish(GameEvent::GameStarted {
            session_id,
            base_word,
            players: (first, second),
        });

        loop {
            let (player, slot) = self.finalizer.active_turn().await?;
            self.ui.write_line(&self.texts.turn_prompt(
                &player,
                slot.number(),
                self.turn_limit.as_secs(),
            ));

            let outcome = match self.ui.read_word(self.turn_limit).await? {
                TimedInput::Closed => {
                    debug!(%session_id, %player, "Input closed mid-game");
                    if let Some(outcome) = self.finalizer.abandon().await? {
                        self.announce_end(session_id, &outcome).await;
                    }
                    return Ok(PlayResult::InputClosed);
                }
                TimedInput::Timeout => self.finalizer.time_out().await?,
                TimedInput::Word(token) => {
                    if let Some(command) = GameCommand::parse(&token) {
                        self.run_command(session_id, &command).await;
                        continue;
                    }
                    self.finalizer.play_word(&token).await?
                }
            };

            if let TurnOutcome::Accepted { word, .. } = &outcome {
                self.ui.write_line(&self.texts.word_accepted(word));
                self.events.publish(GameEvent::WordAccepted {
                    session_id,
                    player,
                    word: word.clone(),
                });
            } else {
                self.announce_end(session_id, &outcome).await;
                break;
            }
        }

        self.ui.write_line(&self.texts.press_enter());
        match self.ui.read_line().await? {
            Some(_) => Ok(PlayResult::Finished),
            None => Ok(PlayResult::InputClosed),
        }
    }

    /// Prompt for two distinct, non-empty names and make sure both players
    /// exist in the score store.
    async fn register_players(&mut self) -> Result<Option<(String, String)>, ControllerError> {
        let texts = self.texts;
        let Some(first) = self.prompt_player(&texts.enter_first_player()).await? else {
            return Ok(None);
        };

        loop {
            let Some(second) = self.prompt_player(&texts.enter_second_player()).await? else {
                return Ok(None);
            };
            if names_match(&first, &second) {
                self.ui.write_line(&texts.names_must_differ());
                continue;
            }
            return Ok(Some((first, second)));
        }
    }

    async fn prompt_player(&mut self, prompt: &str) -> Result<Option<String>, ControllerError> {
        loop {
            self.ui.write_line(prompt);
            let Some(line) = self.ui.read_line().await? else {
                return Ok(None);
            };

            let created = self.finalizer.scores().lock().await.get_or_create_player(&line);
            match created {
                Ok(player) => return Ok(Some(player.name)),
                // Blank name, ask again
                Err(StoreError::InvalidArgument(_)) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn choose_base_word(
        &mut self,
        first: &str,
        second: &str,
    ) -> Result<Option<Game>, ControllerError> {
        loop {
            self.ui.write_line(&self.texts.enter_base_word());
            let Some(line) = self.ui.read_line().await? else {
                return Ok(None);
            };

            match Game::new(self.validator, &normalize_word(&line), first, second) {
                Ok(game) => return Ok(Some(game)),
                Err(GameError::InvalidBaseWord { word }) => {
                    debug!(%word, "Rejected base word");
                    self.ui.write_line(&self.texts.invalid_base_word());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn announce_end(&mut self, session_id: SessionId, outcome: &TurnOutcome) {
        let TurnOutcome::Lost {
            loser,
            winner,
            reason,
        } = outcome
        else {
            return;
        };

        for line in self
            .texts
            .result_banner(&self.texts.game_over(), winner, loser, reason)
        {
            self.ui.write_line(&line);
        }
        self.events.publish(GameEvent::GameEnded {
            session_id,
            winner: winner.clone(),
            loser: loser.clone(),
            reason: reason.to_string(),
        });

        let backup = self
            .finalizer
            .scores()
            .lock()
            .await
            .pending_backup()
            .map(Path::to_path_buf);
        if let Some(backup) = backup {
            self.ui.write_line(&self.texts.result_in_backup(&backup));
        }

        self.show_pair_stats().await;
    }

    async fn run_command(&mut self, session_id: SessionId, command: &GameCommand) {
        self.events.publish(GameEvent::CommandIssued {
            session_id,
            command: format!("{:?}", command),
        });

        match command {
            GameCommand::ShowWords => self.show_used_words().await,
            GameCommand::Score => self.show_pair_stats().await,
            GameCommand::TotalScore => self.show_total_stats().await,
            GameCommand::Unknown(token) => {
                self.ui.write_line(&self.texts.unknown_command(token));
            }
        }
    }

    async fn show_used_words(&mut self) {
        let words = self
            .finalizer
            .session()
            .await
            .map(|session| session.used_words)
            .unwrap_or_default();

        if words.is_empty() {
            self.ui.write_line(&self.texts.no_words_yet());
            return;
        }

        self.ui.write_line(&self.texts.used_words());
        for (i, word) in words.iter().enumerate() {
            self.ui.write_line(&format!("  {}. {}", i + 1, word));
        }
    }

    async fn show_pair_stats(&mut self) {
        let Some(session) = self.finalizer.session().await else {
            return;
        };

        let stats = self
            .finalizer
            .scores()
            .lock()
            .await
            .stats_for_pair(&session.player1_name, &session.player2_name);
        match stats {
            Ok((first, second)) => {
                self.ui.write_line(&self.texts.current_players_stats());
                self.ui.write_line(&self.texts.stats_line(&first));
                self.ui.write_line(&self.texts.stats_line(&second));
            }
            Err(e) => {
                warn!(error = %e, "Failed to load pair statistics");
                self.ui.write_line(&self.texts.stats_error(&e));
            }
        }
    }

    async fn show_total_stats(&mut self) {
        let stats = self.finalizer.scores().lock().await.total_stats();
        match stats {
            Ok(stats) if stats.is_empty() => {
                self.ui.write_line(&self.texts.no_player_data());
            }
            Ok(stats) => {
                self.ui.write_line(&self.texts.total_stats());
                for entry in &stats {
                    self.ui.write_line(&self.texts.stats_line(entry));
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to load total statistics");
                self.ui.write_line(&self.texts.stats_error(&e));
            }
        }
    }
}
