//! Error types for the tc-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors behind one
/// interface for every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Input file not found: {path}")]
    InputFileNotFound { path: PathBuf },

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Report mapping error: {0}")]
    Report(String),

    #[error("History error: {0}")]
    History(String),

    #[error("Calculation not found: {0}")]
    CalculationNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<tc_project::ProjectError> for AppError {
    fn from(err: tc_project::ProjectError) -> Self {
        match err {
            tc_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Input(other.to_string()),
        }
    }
}

impl From<tc_project::ValidationError> for AppError {
    fn from(err: tc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<tc_calc::CalcError> for AppError {
    fn from(err: tc_calc::CalcError) -> Self {
        match err {
            tc_calc::CalcError::Validation(e) => AppError::Validation(e.to_string()),
        }
    }
}

impl From<tc_report::ReportError> for AppError {
    fn from(err: tc_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}

impl From<tc_results::ResultsError> for AppError {
    fn from(err: tc_results::ResultsError) -> Self {
        match err {
            tc_results::ResultsError::CalculationNotFound { id } => {
                AppError::CalculationNotFound(id)
            }
            other => AppError::History(other.to_string()),
        }
    }
}
