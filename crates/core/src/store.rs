use crate::error::Result;
use crate::fields::SAMPLE;
use crate::merge::SUMMARY_SHEET;
use chrono::Local;
use growthsum_sheet::{Sheet, XlsxReadOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extension of summary workbooks.
pub const SUMMARY_EXTENSION: &str = "xlsx";

/// Reads and writes `summary_<N>cols.xlsx` files in one output directory.
///
/// Records of different widths land in different files, so the merge step
/// only sees a width mismatch when a file was edited by hand.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    output_dir: PathBuf,
}

impl SummaryStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        SummaryStore {
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name for a summary with `column_count` columns
    #[must_use]
    pub fn file_name(column_count: usize) -> String {
        format!("summary_{column_count}cols.{SUMMARY_EXTENSION}")
    }

    #[must_use]
    pub fn summary_path(&self, column_count: usize) -> PathBuf {
        self.output_dir.join(Self::file_name(column_count))
    }

    /// Load the existing summary for this column count, if there is one
    pub fn load(&self, column_count: usize) -> Result<Option<Sheet>> {
        let path = self.summary_path(column_count);
        if !path.is_file() {
            debug!(path = %path.display(), "no existing summary");
            return Ok(None);
        }

        let options = XlsxReadOptions::default()
            .with_headers(true)
            .with_string_column(SAMPLE);
        let sheet = Sheet::from_xlsx_sheet(&path, SUMMARY_SHEET, &options)?;
        info!(
            path = %path.display(),
            rows = sheet.data_row_count(),
            columns = sheet.col_count(),
            "existing summary loaded"
        );
        Ok(Some(sheet))
    }

    /// Write `table` as the summary for `column_count`, overwriting any
    /// existing file. Returns the path written.
    pub fn save(&self, column_count: usize, table: &Sheet) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.summary_path(column_count);

        let mut table = table.clone();
        table.set_name(SUMMARY_SHEET);
        table.save_as_xlsx(&path)?;

        info!(path = %path.display(), rows = table.data_row_count(), "summary written");
        Ok(path)
    }

    /// Rename the existing summary to `summary_<N>cols.<timestamp>.xlsx`.
    /// Returns the new path, or `None` when there was nothing to move.
    pub fn archive(&self, column_count: usize) -> Result<Option<PathBuf>> {
        let path = self.summary_path(column_count);
        if !path.is_file() {
            return Ok(None);
        }

        let stamp = Local::now().format("%Y%m%dT%H%M%S").to_string();
        let mut target = self
            .output_dir
            .join(format!("summary_{column_count}cols.{stamp}.{SUMMARY_EXTENSION}"));
        let mut n = 1;
        while target.exists() {
            target = self.output_dir.join(format!(
                "summary_{column_count}cols.{stamp}-{n}.{SUMMARY_EXTENSION}"
            ));
            n += 1;
        }

        fs::rename(&path, &target)?;
        info!(from = %path.display(), to = %target.display(), "summary archived");
        Ok(Some(target))
    }
}
