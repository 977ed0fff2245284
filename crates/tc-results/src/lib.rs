//! tc-results: calculation history storage.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_calculation_id;
pub use store::{CalculationStore, DEFAULT_LIST_LIMIT};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Calculation not found: {id}")]
    CalculationNotFound { id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
