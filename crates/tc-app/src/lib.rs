//! Shared application service layer for transfocalc.
//!
//! Front ends (the CLI, a form server) go through this crate for input
//! loading, calculation, report field mapping and history access.

pub mod calculation_service;
pub mod error;
pub mod history_service;
pub mod input_service;

pub use calculation_service::{
    CalculationOptions, CalculationRequest, CalculationResponse, ENGINE_VERSION,
    calculate_from_file, mapping_report, run_calculation, to_json,
};
pub use error::{AppError, AppResult};
pub use history_service::{
    delete_calculation, history_store, list_calculations, load_calculation,
};
pub use input_service::{InputSummary, load_inputs, save_inputs, summarize, validate_inputs};
