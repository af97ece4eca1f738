use crate::error::{Result, SummaryError};
use crate::record::Record;
use growthsum_sheet::Sheet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Name of the single worksheet in a summary file.
pub const SUMMARY_SHEET: &str = "Summary";

/// What to do when the existing summary's column count differs from the
/// new record's header count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaMismatchPolicy {
    /// Drop the existing rows and keep only the new record.
    #[default]
    Replace,
    /// Fail without touching the existing file.
    Reject,
    /// Move the existing file aside, then start over with the new record.
    Archive,
}

/// How the final summary table came about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MergeAction {
    Created,
    Appended {
        previous_rows: usize,
    },
    Replaced {
        discarded_rows: usize,
        previous_columns: usize,
    },
    Archived {
        archived_rows: usize,
        previous_columns: usize,
    },
}

/// The table to persist and the decision that produced it.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub table: Sheet,
    pub action: MergeAction,
}

/// Combine a new record with the existing summary table, if any.
///
/// Only column counts are compared; header names are never reconciled.
/// Existing rows always precede the new one.
pub fn merge_record(
    record: &Record,
    existing: Option<Sheet>,
    policy: SchemaMismatchPolicy,
) -> Result<MergeOutcome> {
    let fresh = record.to_sheet(SUMMARY_SHEET)?;

    let Some(mut table) = existing else {
        info!(columns = record.len(), "starting new summary table");
        return Ok(MergeOutcome {
            table: fresh,
            action: MergeAction::Created,
        });
    };

    let previous_rows = table.data_row_count();
    let previous_columns = table.col_count();

    if previous_columns == record.len() {
        table.append(&fresh)?;
        table.set_name(SUMMARY_SHEET);
        info!(previous_rows, "record appended to summary");
        return Ok(MergeOutcome {
            table,
            action: MergeAction::Appended { previous_rows },
        });
    }

    let action = match policy {
        SchemaMismatchPolicy::Reject => {
            return Err(SummaryError::SchemaMismatch {
                expected: record.len(),
                found: previous_columns,
            });
        }
        SchemaMismatchPolicy::Replace => {
            warn!(
                previous_columns,
                columns = record.len(),
                discarded_rows = previous_rows,
                "summary column count differs, replacing existing rows"
            );
            MergeAction::Replaced {
                discarded_rows: previous_rows,
                previous_columns,
            }
        }
        SchemaMismatchPolicy::Archive => {
            warn!(
                previous_columns,
                columns = record.len(),
                archived_rows = previous_rows,
                "summary column count differs, archiving existing file"
            );
            MergeAction::Archived {
                archived_rows: previous_rows,
                previous_columns,
            }
        }
    };

    Ok(MergeOutcome {
        table: fresh,
        action,
    })
}
