pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod finalizer;
pub mod menu;
pub mod texts;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use controller::{GameController, PlayResult};
pub use errors::ControllerError;
pub use finalizer::SessionFinalizer;
pub use ui::{ConsoleUi, TimedInput, UserInterface};
