use crate::fields::EMPTY;
use growthsum_sheet::{CellValue, Sheet};
use tracing::debug;

/// Read the first data cell of `name` as its string presentation.
///
/// Yields the [`EMPTY`] sentinel when the column is absent, has no data rows,
/// or its first cell is null. Never fails.
pub fn extract_field(sheet: &Sheet, name: &str) -> CellValue {
    match sheet.get_by_name(0, name) {
        Ok(cell) if !cell.is_null() => CellValue::String(cell.as_str()),
        Ok(_) => CellValue::String(EMPTY.to_string()),
        Err(err) => {
            debug!(sheet = sheet.name(), field = name, error = %err, "field unavailable");
            CellValue::String(EMPTY.to_string())
        }
    }
}
