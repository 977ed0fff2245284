//! tc-report: report field mapping.
//!
//! Turns one input snapshot and its results into the flat
//! `report field → text` dictionary consumed by the PDF form filler, and
//! names the generated files.

pub mod field_map;
pub mod format;
pub mod mapper;
pub mod naming;

pub use field_map::{FIELD_TABLE, report_field};
pub use format::{format_number, format_value};
pub use mapper::{
    FieldMapper, FieldMapping, ResultSection, coupling_code, format_date,
    installation_description,
};
pub use naming::{report_file_name, report_file_name_now};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Unknown result section: {name}")]
    UnknownSection { name: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
