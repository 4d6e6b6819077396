use game_types::Language;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::controller::{GameController, PlayResult};
use crate::errors::ControllerError;
use crate::finalizer::SessionFinalizer;
use crate::menu::{MenuChoice, parse_language_choice};
use crate::texts::Texts;
use crate::ui::UserInterface;

/// Main menu loop. Runs until the player exits or input is closed.
pub struct App<U: UserInterface> {
    ui: U,
    config: Config,
    language: Language,
    finalizer: SessionFinalizer,
}

impl<U: UserInterface> App<U> {
    pub fn new(ui: U, config: Config, finalizer: SessionFinalizer) -> Self {
        Self {
            ui,
            language: config.language,
            config,
            finalizer,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Errors inside a game are reported and the menu is shown again.
    /// Only storage write faults are returned.
    pub async fn run(&mut self) -> Result<(), ControllerError> {
        loop {
            let texts = Texts::new(self.language);
            self.ui.clear();
            for line in texts.menu_lines() {
                self.ui.write_line(&line);
            }
            self.ui.write(&texts.menu_prompt());

            let Some(line) = self.ui.read_line().await? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::StartGame) => {
                    if !self.start_game(texts).await? {
                        break;
                    }
                }
                Some(MenuChoice::ChooseLanguage) => {
                    if !self.choose_language(texts).await? {
                        break;
                    }
                }
                Some(MenuChoice::Exit) => {
                    self.ui.write_line(&texts.exit());
                    break;
                }
                None => self.ui.write_line(&texts.input_error()),
            }
        }

        info!("Leaving main menu");
        Ok(())
    }

    /// Returns `false` once input is closed.
    async fn start_game(&mut self, texts: Texts) -> Result<bool, ControllerError> {
        let result = {
            let mut controller = GameController::new(
                &mut self.ui,
                self.finalizer.clone(),
                self.language,
                self.config.turn_limit(),
            );
            controller.play().await
        };

        match result {
            Ok(PlayResult::Finished) => Ok(true),
            Ok(PlayResult::InputClosed) => Ok(false),
            Err(e) if e.is_fatal() => {
                error!(error = %e, "Game result could not be stored");
                self.ui.write_line(&texts.save_failed(&e));
                Err(e)
            }
            Err(e) => {
                warn!(error = %e, "Game aborted");
                self.ui.write_line(&texts.error(&e));
                self.ui.write_line(&texts.press_enter());
                Ok(self.ui.read_line().await?.is_some())
            }
        }
    }

    async fn choose_language(&mut self, texts: Texts) -> Result<bool, ControllerError> {
        for line in texts.language_menu_lines() {
            self.ui.write_line(&line);
        }
        self.ui.write(&texts.menu_prompt());

        let Some(line) = self.ui.read_line().await? else {
            return Ok(false);
        };
        match parse_language_choice(&line) {
            Some(language) => {
                self.language = language;
                self.ui.write_line(&Texts::new(language).language_changed());
            }
            None => self.ui.write_line(&texts.input_error()),
        }
        Ok(true)
    }
}
