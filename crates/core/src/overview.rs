use crate::assemble::{assemble_record, ExperimentSections};
use crate::error::{Result, SummaryError};
use crate::fields::SAMPLE;
use crate::growth_rate::{fill_growth_rate, GrowthRateOutcome};
use crate::merge::{merge_record, MergeAction, SchemaMismatchPolicy};
use crate::record::Record;
use crate::store::SummaryStore;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension appended to the experiment name before the name is tried as given.
pub const INPUT_EXTENSION: &str = "xlsx";

/// Where to read from, where to write to, and how to treat width mismatches.
#[derive(Debug, Clone)]
pub struct OverviewOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub on_schema_mismatch: SchemaMismatchPolicy,
    /// Build and merge, but write nothing.
    pub dry_run: bool,
}

impl OverviewOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        OverviewOptions {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            on_schema_mismatch: SchemaMismatchPolicy::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SchemaMismatchPolicy) -> Self {
        self.on_schema_mismatch = policy;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of one `generate_overview` run.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    pub input_path: PathBuf,
    pub record: Record,
    pub growth_rate: GrowthRateOutcome,
    pub summary_path: PathBuf,
    pub action: MergeAction,
    /// Data rows in the summary after this run.
    pub summary_rows: usize,
    pub archived_to: Option<PathBuf>,
    pub dry_run: bool,
}

/// Locate the experiment workbook for `name` inside `input_dir`.
///
/// `<name>.xlsx` is tried first, then `<name>` as given. Dots inside the name
/// are part of the name, so `GaN_2024.05` resolves to `GaN_2024.05.xlsx`.
pub fn resolve_input_path(input_dir: &Path, name: &str) -> Result<PathBuf> {
    let with_extension = input_dir.join(format!("{name}.{INPUT_EXTENSION}"));
    if with_extension.is_file() {
        return Ok(with_extension);
    }

    let literal = input_dir.join(name);
    if literal.is_file() {
        debug!(path = %literal.display(), "using input name as given");
        return Ok(literal);
    }

    Err(SummaryError::InputNotFound {
        path: with_extension,
    })
}

/// Read one experiment workbook and fold its record into the rolling summary.
pub fn generate_overview(input_name: &str, options: &OverviewOptions) -> Result<OverviewReport> {
    let input_path = resolve_input_path(&options.input_dir, input_name)?;
    let sections = ExperimentSections::load(&input_path)?;

    let mut record = assemble_record(&sections)?;
    let growth_rate = fill_growth_rate(&mut record)?;
    let column_count = record.len();
    info!(
        sample = %record.get(SAMPLE).map(ToString::to_string).unwrap_or_default(),
        columns = column_count,
        "record assembled"
    );

    let store = SummaryStore::new(&options.output_dir);
    let existing = store.load(column_count)?;
    let outcome = merge_record(&record, existing, options.on_schema_mismatch)?;
    let summary_rows = outcome.table.data_row_count();

    let mut archived_to = None;
    let summary_path = if options.dry_run {
        info!("dry run, summary not written");
        store.summary_path(column_count)
    } else {
        if matches!(outcome.action, MergeAction::Archived { .. }) {
            archived_to = store.archive(column_count)?;
        }
        store.save(column_count, &outcome.table)?
    };

    Ok(OverviewReport {
        input_path,
        record,
        growth_rate,
        summary_path,
        action: outcome.action,
        summary_rows,
        archived_to,
        dry_run: options.dry_run,
    })
}
