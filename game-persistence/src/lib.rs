pub mod errors;
pub mod repositories;
pub mod store;

pub use errors::StoreError;
pub use repositories::ScoreRepository;
pub use store::{DEFAULT_SCORES_FILE, SaveOutcome, ScoreStore};
