pub mod game_state;
pub mod stats;
pub mod word_validation;
pub mod game_events;

// Re-export main components
pub use game_state::*;
pub use stats::*;
pub use word_validation::*;
pub use game_events::*;
