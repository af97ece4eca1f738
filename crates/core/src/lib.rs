//! # growthsum-core
//!
//! Builds one summary record per experiment workbook and folds it into a
//! rolling summary workbook.
//!
//! The pipeline, leaves first:
//! - [`extract_field`] reads a single presentation-ready value from a section
//! - [`assemble_record`] walks the five sections in a fixed order
//! - [`fill_growth_rate`] derives Growth Rate from Thickness and Growth Time
//! - [`merge_record`] appends to or replaces the existing summary table
//! - [`SummaryStore`] reads and writes `summary_<N>cols.xlsx`
//!
//! [`generate_overview`] runs all of them for one input file.

/// Record assembly from experiment sections.
pub mod assemble;
/// Error types and result aliases.
pub mod error;
/// Single-field extraction.
pub mod extract;
/// Section names, field names and placeholders.
pub mod fields;
/// Derived Growth Rate.
pub mod growth_rate;
/// Summary table merge policy.
pub mod merge;
/// End-to-end run over one experiment file.
pub mod overview;
/// Ordered summary record.
pub mod record;
/// Summary file persistence.
pub mod store;

pub use assemble::{assemble_record, ExperimentSections};
pub use error::{Result, SummaryError};
pub use extract::extract_field;
pub use growth_rate::{fill_growth_rate, is_digit_string, GrowthRateOutcome};
pub use merge::{merge_record, MergeAction, MergeOutcome, SchemaMismatchPolicy, SUMMARY_SHEET};
pub use overview::{generate_overview, resolve_input_path, OverviewOptions, OverviewReport};
pub use record::{Record, RecordBuilder};
pub use store::{SummaryStore, SUMMARY_EXTENSION};
