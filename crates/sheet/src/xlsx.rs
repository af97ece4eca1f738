use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Options for reading Excel files
///
/// Rows where every cell is blank are always dropped.
#[derive(Debug, Clone, Default)]
pub struct XlsxReadOptions {
    /// Whether the first surviving row contains headers
    pub has_headers: bool,
    /// Rows starting with this prefix are dropped; a cell starting with it
    /// blanks the rest of its row
    pub comment_prefix: Option<String>,
    /// Columns whose data cells are kept as their string presentation
    pub string_columns: Vec<String>,
}

impl XlsxReadOptions {
    /// Set whether the first row contains headers
    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set the comment prefix
    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: &str) -> Self {
        self.comment_prefix = Some(prefix.to_string());
        self
    }

    /// Read the named column as strings
    #[must_use]
    pub fn with_string_column(mut self, name: &str) -> Self {
        self.string_columns.push(name.to_string());
        self
    }
}

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => {
                let text = datetime.format("%Y-%m-%d %H:%M:%S").to_string();
                match text.strip_suffix(" 00:00:00") {
                    Some(date) => CellValue::String(date.to_string()),
                    None => CellValue::String(text),
                }
            }
            // Durations and out-of-range serials keep the raw Excel number
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

fn is_comment(cell: &CellValue, prefix: &str) -> bool {
    matches!(cell, CellValue::String(s) if s.trim_start().starts_with(prefix))
}

/// Apply comment and blank-row rules to one raw row.
/// Returns `None` when the row should be dropped.
fn clean_row(mut row: Vec<CellValue>, options: &XlsxReadOptions) -> Option<Vec<CellValue>> {
    if let Some(prefix) = options.comment_prefix.as_deref() {
        if row
            .iter()
            .find(|cell| !cell.is_blank())
            .is_some_and(|cell| is_comment(cell, prefix))
        {
            return None;
        }
        if let Some(start) = row.iter().position(|cell| is_comment(cell, prefix)) {
            for cell in &mut row[start..] {
                *cell = CellValue::Null;
            }
        }
    }

    if row.iter().all(CellValue::is_blank) {
        return None;
    }
    Some(row)
}

/// Give blank header cells a positional name and suffix repeated names,
/// so that `name_columns_by_row` always succeeds on loaded data.
fn normalize_header(header: &mut [CellValue]) {
    let mut seen = HashSet::new();
    for (i, cell) in header.iter_mut().enumerate() {
        let base = if cell.is_blank() {
            format!("Unnamed: {i}")
        } else {
            cell.as_str()
        };
        let mut name = base.clone();
        let mut n = 1;
        while !seen.insert(name.clone()) {
            name = format!("{base}.{n}");
            n += 1;
        }
        *cell = CellValue::String(name);
    }
}

fn range_to_sheet(name: &str, range: &Range<Data>, options: &XlsxReadOptions) -> Result<Sheet> {
    let data: Vec<Vec<CellValue>> = range
        .rows()
        .filter_map(|row| clean_row(row.iter().map(data_to_cell_value).collect(), options))
        .collect();

    let mut sheet = Sheet::with_name(name);
    *sheet.data_mut() = data;

    if options.has_headers && sheet.row_count() > 0 {
        normalize_header(&mut sheet.data_mut()[0]);
        sheet.name_columns_by_row(0)?;

        let names = sheet.column_names().cloned().unwrap_or_default();
        let string_cols: Vec<usize> = names
            .iter()
            .enumerate()
            .filter(|(_, n)| options.string_columns.contains(*n))
            .map(|(i, _)| i)
            .collect();
        for row in sheet.data_mut().iter_mut().skip(1) {
            for &col in &string_cols {
                if let Some(cell) = row.get_mut(col) {
                    *cell = std::mem::take(cell).into_string_cell();
                }
            }
        }
    }

    Ok(sheet)
}

fn open_xlsx(path: &Path) -> Result<Xlsx<BufReader<File>>> {
    if !path.exists() {
        return Err(SheetError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )));
    }
    Ok(open_workbook(path)?)
}

impl Sheet {
    /// Load one named worksheet from an Excel file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened, sheet not found, or read fails.
    pub fn from_xlsx_sheet<P: AsRef<Path>>(
        path: P,
        sheet_name: &str,
        options: &XlsxReadOptions,
    ) -> Result<Self> {
        let mut workbook = open_xlsx(path.as_ref())?;

        if !workbook.sheet_names().iter().any(|n| n == sheet_name) {
            return Err(SheetError::SheetNotFound {
                name: sheet_name.to_string(),
            });
        }

        let range = workbook.worksheet_range(sheet_name)?;
        range_to_sheet(sheet_name, &range, options)
    }

    /// Save the sheet to an Excel file as a single worksheet named after the sheet.
    /// Any existing file at `path` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        write_to_worksheet(self.name(), self, worksheet)?;

        workbook.save(path.as_ref())?;
        Ok(())
    }
}

/// Write sheet data to a worksheet
fn write_to_worksheet(name: &str, sheet: &Sheet, worksheet: &mut Worksheet) -> Result<()> {
    worksheet.set_name(name)?;

    for (row_idx, row) in sheet.data().iter().enumerate() {
        let row_num = u32::try_from(row_idx)
            .map_err(|_| SheetError::Xlsx("Row index overflow".to_string()))?;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = u16::try_from(col_idx)
                .map_err(|_| SheetError::Xlsx("Column index overflow".to_string()))?;

            match cell {
                CellValue::Null => {} // Leave empty
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row_num, col_num, *b)?;
                }
                CellValue::Int(i) => {
                    // Note: Excel stores all numbers as f64, so integers > 2^53
                    // may lose precision
                    worksheet.write_number(row_num, col_num, *i as f64)?;
                }
                CellValue::Float(f) => {
                    worksheet.write_number(row_num, col_num, *f)?;
                }
                CellValue::String(s) => {
                    worksheet.write_string(row_num, col_num, s)?;
                }
            }
        }
    }

    Ok(())
}

impl Book {
    /// Load a book from an Excel file (all sheets) with options
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened or read.
    pub fn from_xlsx_with_options<P: AsRef<Path>>(path: P, options: &XlsxReadOptions) -> Result<Self> {
        let mut workbook = open_xlsx(path.as_ref())?;

        let sheet_names = workbook.sheet_names();
        let mut book = Book::new();

        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;
            book.add_sheet(&sheet_name, range_to_sheet(&sheet_name, &range, options)?)?;
        }

        Ok(book)
    }

    /// Save the book to an Excel file, one worksheet per sheet
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();

        for (name, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            write_to_worksheet(name, sheet, worksheet)?;
        }

        workbook.save(path.as_ref())?;
        Ok(())
    }
}
