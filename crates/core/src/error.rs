//! Error types for growthsum.

use growthsum_sheet::SheetError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for summary operations.
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Errors produced while building a record or updating the summary table.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The experiment file does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The experiment file lacks one of the five required sections.
    #[error("Experiment file has no '{name}' section")]
    MissingSection { name: String },

    /// A record operation referenced a field the record does not have.
    #[error("Record has no field '{name}'")]
    MissingField { name: String },

    /// The same header was pushed twice while building a record.
    #[error("Duplicate record header: {name}")]
    DuplicateHeader { name: String },

    /// A digit-only value could not be converted to a number.
    #[error("Cannot read '{value}' in field '{field}' as a number")]
    MalformedNumber { field: String, value: String },

    /// Growth Rate would divide by a zero Growth Time.
    #[error("Growth Time is zero, cannot derive Growth Rate (Thickness {thickness})")]
    ZeroGrowthTime { thickness: String },

    /// The existing summary has a different width and the policy is to reject.
    #[error("Existing summary has {found} columns but the new record has {expected}")]
    SchemaMismatch { expected: usize, found: usize },

    /// Spreadsheet read or write failure.
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
