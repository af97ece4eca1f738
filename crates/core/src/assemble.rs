use crate::error::{Result, SummaryError};
use crate::extract::extract_field;
use crate::fields::{
    AFM_REFLECTANCE_SEM, COLLABORATOR, EMPTY, GROWTH_RATE, GROWTH_RATE_PLACEHOLDER, GROWTH_RUN,
    GROWTH_RUN_QUANTITIES, HRXRD, NOTES, NOTES_PLACEHOLDER, OVERVIEW, OVERVIEW_FIELDS, PHASE,
    SAMPLE, SAMPLE_CUT, THICKNESS,
};
use crate::record::Record;
use growthsum_sheet::{Book, CellValue, Sheet, SheetError, XlsxReadOptions};
use std::path::Path;
use tracing::{debug, info};

/// The five sections of one experiment workbook.
#[derive(Debug, Clone)]
pub struct ExperimentSections {
    pub overview: Sheet,
    pub growth_run: Sheet,
    pub afm_reflectance_sem: Sheet,
    pub hrxrd: Sheet,
    pub sample_cut: Sheet,
}

impl ExperimentSections {
    /// How experiment sections are read: header row, `#` comment rows,
    /// Sample kept as text.
    #[must_use]
    pub fn read_options() -> XlsxReadOptions {
        XlsxReadOptions::default()
            .with_headers(true)
            .with_comment_prefix("#")
            .with_string_column(SAMPLE)
    }

    /// Load all sections from an experiment workbook
    pub fn load(path: &Path) -> Result<Self> {
        let book = Book::from_xlsx_with_options(path, &Self::read_options())?;
        info!(path = %path.display(), sheets = ?book.sheet_names(), "experiment workbook loaded");
        Self::from_book(book)
    }

    /// Pick the named sections out of a book. Extra sheets are ignored.
    pub fn from_book(mut book: Book) -> Result<Self> {
        let mut take = |name: &str| {
            book.take_sheet(name).map_err(|err| match err {
                SheetError::SheetNotFound { name } => SummaryError::MissingSection { name },
                other => other.into(),
            })
        };

        Ok(ExperimentSections {
            overview: take(OVERVIEW)?,
            growth_run: take(GROWTH_RUN)?,
            afm_reflectance_sem: take(AFM_REFLECTANCE_SEM)?,
            hrxrd: take(HRXRD)?,
            sample_cut: take(SAMPLE_CUT)?,
        })
    }
}

/// GrowthRun columns whose names mention a tracked quantity, in sheet order.
fn growth_run_matches(growth_run: &Sheet) -> Vec<&str> {
    growth_run
        .column_names()
        .map(|names| {
            names
                .iter()
                .map(String::as_str)
                .filter(|name| GROWTH_RUN_QUANTITIES.iter().any(|q| name.contains(q)))
                .collect()
        })
        .unwrap_or_default()
}

/// Build the summary record for one experiment.
///
/// Column order: the Overview fields, Thickness, Growth Rate (placeholder),
/// matching GrowthRun columns, Phase, Collaborator, Notes (placeholder).
/// GrowthRun values are copied raw; a matching column with no data rows
/// gets the `empty` sentinel so every header carries a value.
pub fn assemble_record(sections: &ExperimentSections) -> Result<Record> {
    let mut builder = Record::builder();

    for field in OVERVIEW_FIELDS {
        builder.push(field, extract_field(&sections.overview, field))?;
    }

    builder.push(THICKNESS, extract_field(&sections.afm_reflectance_sem, THICKNESS))?;
    builder.push(GROWTH_RATE, GROWTH_RATE_PLACEHOLDER)?;

    for name in growth_run_matches(&sections.growth_run) {
        let value = sections
            .growth_run
            .column_values(name)?
            .into_iter()
            .next()
            .unwrap_or_else(|| CellValue::String(EMPTY.to_string()));
        debug!(column = name, value = %value, "growth run column matched");
        builder.push(name, value)?;
    }

    builder.push(PHASE, extract_field(&sections.hrxrd, PHASE))?;
    builder.push(COLLABORATOR, extract_field(&sections.sample_cut, COLLABORATOR))?;
    builder.push(NOTES, NOTES_PLACEHOLDER)?;

    Ok(builder.build())
}
