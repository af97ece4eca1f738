use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A sheet representing a 2D grid of cells (row-major storage)
///
/// When columns are named, the header row stays in the data at index 0.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
    column_names: Option<Vec<String>>,
    column_index: Option<HashMap<String, usize>>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
            column_names: None,
            column_index: None,
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
            column_names: None,
            column_index: None,
        }
    }

    /// Create a sheet from a list of records (list of dictionaries)
    ///
    /// Column order is determined by the first record. The result has
    /// named columns, with the header row at index 0.
    pub fn from_records(records: Vec<IndexMap<String, CellValue>>) -> Result<Self> {
        if records.is_empty() {
            return Ok(Sheet::new());
        }

        let col_names: Vec<String> = records[0].keys().cloned().collect();

        let mut data = Vec::with_capacity(records.len() + 1);
        data.push(
            col_names
                .iter()
                .map(|n| CellValue::String(n.clone()))
                .collect(),
        );

        for record in &records {
            let row: Vec<CellValue> = col_names
                .iter()
                .map(|name| record.get(name).cloned().unwrap_or(CellValue::Null))
                .collect();
            data.push(row);
        }

        let mut sheet = Sheet {
            name: "Sheet1".to_string(),
            data,
            column_names: None,
            column_index: None,
        };
        sheet.name_columns_by_row(0)?;

        Ok(sheet)
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows, including the header row when columns are named
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of rows below the header
    #[must_use]
    pub fn data_row_count(&self) -> usize {
        self.data.len().saturating_sub(self.header_offset())
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ===== Cell Access =====

    /// Get a cell value by row and column index (0-based)
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    /// Get a cell value by data row index (below the header) and column name
    pub fn get_by_name(&self, row: usize, col_name: &str) -> Result<&CellValue> {
        let col = self.column_index_by_name(col_name)?;
        self.get(row + self.header_offset(), col)
    }

    // ===== Row Operations =====

    /// Get an entire row by index (0-based)
    pub fn row(&self, index: usize) -> Result<&Vec<CellValue>> {
        self.data.get(index).ok_or(SheetError::RowIndexOutOfBounds {
            index,
            count: self.row_count(),
        })
    }

    // ===== Column Operations =====

    /// Get an entire column by index (0-based), header included
    pub fn column(&self, index: usize) -> Result<Vec<CellValue>> {
        if index >= self.col_count() {
            return Err(SheetError::ColumnIndexOutOfBounds {
                index,
                count: self.col_count(),
            });
        }

        Ok(self
            .data
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect())
    }

    /// Get an entire column by name, header included
    pub fn column_by_name(&self, name: &str) -> Result<Vec<CellValue>> {
        let index = self.column_index_by_name(name)?;
        self.column(index)
    }

    /// Get the data cells of a named column (header excluded)
    pub fn column_values(&self, name: &str) -> Result<Vec<CellValue>> {
        let values = self.column_by_name(name)?;
        Ok(values.into_iter().skip(self.header_offset()).collect())
    }

    // ===== Named Access =====

    /// Use the specified row as column headers
    ///
    /// # Errors
    ///
    /// Returns `SheetError::DuplicateColumnName` if the header row contains duplicate names.
    pub fn name_columns_by_row(&mut self, row_index: usize) -> Result<()> {
        let header_row = self.row(row_index)?;
        let names: Vec<String> = header_row.iter().map(|c| c.as_str()).collect();

        let mut index_map = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            if index_map.contains_key(name) {
                return Err(SheetError::DuplicateColumnName { name: name.clone() });
            }
            index_map.insert(name.clone(), i);
        }

        self.column_names = Some(names);
        self.column_index = Some(index_map);
        Ok(())
    }

    /// Get column names (if set)
    #[must_use]
    pub fn column_names(&self) -> Option<&Vec<String>> {
        self.column_names.as_ref()
    }

    fn column_index_by_name(&self, name: &str) -> Result<usize> {
        self.column_index
            .as_ref()
            .ok_or_else(|| {
                SheetError::ColumnsNotNamed("Call name_columns_by_row() first".to_string())
            })?
            .get(name)
            .copied()
            .ok_or_else(|| SheetError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    fn header_offset(&self) -> usize {
        usize::from(self.column_names.is_some())
    }

    /// Get internal data reference
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get mutable internal data reference
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }

    // ===== Append Operations =====

    /// Append all data rows from another sheet by position (like SQL UNION ALL).
    ///
    /// Column names are not compared; only the column counts must match.
    /// The header row of `other` is skipped when its columns are named.
    pub fn append(&mut self, other: &Sheet) -> Result<()> {
        if self.is_empty() {
            self.data.clone_from(&other.data);
            self.column_names.clone_from(&other.column_names);
            self.column_index.clone_from(&other.column_index);
            return Ok(());
        }

        if self.col_count() != other.col_count() {
            return Err(SheetError::ColumnCountMismatch {
                left: self.col_count(),
                right: other.col_count(),
            });
        }

        self.data
            .extend(other.data.iter().skip(other.header_offset()).cloned());
        Ok(())
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(data: Vec<Vec<&str>>) -> Sheet {
        let mut sheet = Sheet::from_data(data);
        sheet.name_columns_by_row(0).unwrap();
        sheet
    }

    #[test]
    fn test_column_values_skip_header() {
        let sheet = named(vec![vec!["Sample", "Date"], vec!["A1", "2024-01-01"]]);

        let values = sheet.column_values("Sample").unwrap();
        assert_eq!(values, vec![CellValue::String("A1".to_string())]);
        assert_eq!(sheet.data_row_count(), 1);
    }

    #[test]
    fn test_column_values_header_only() {
        let sheet = named(vec![vec!["Phase"]]);

        assert!(sheet.column_values("Phase").unwrap().is_empty());
        assert_eq!(sheet.data_row_count(), 0);
    }

    #[test]
    fn test_missing_column() {
        let sheet = named(vec![vec!["Phase"], vec!["cubic"]]);

        assert!(matches!(
            sheet.column_values("Film"),
            Err(SheetError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_unnamed_columns() {
        let sheet = Sheet::from_data(vec![vec![1, 2]]);
        assert!(matches!(
            sheet.column_by_name("A"),
            Err(SheetError::ColumnsNotNamed(_))
        ));
    }

    #[test]
    fn test_duplicate_header() {
        let mut sheet = Sheet::from_data(vec![vec!["a", "a"]]);
        assert!(matches!(
            sheet.name_columns_by_row(0),
            Err(SheetError::DuplicateColumnName { .. })
        ));
    }

    #[test]
    fn test_get_by_name_offsets_header() {
        let sheet = named(vec![vec!["x", "y"], vec!["1", "2"], vec!["3", "4"]]);
        assert_eq!(
            sheet.get_by_name(1, "y").unwrap(),
            &CellValue::String("4".to_string())
        );
    }

    #[test]
    fn test_from_records_names_columns() {
        let mut record = IndexMap::new();
        record.insert("b".to_string(), CellValue::Int(1));
        record.insert("a".to_string(), CellValue::Null);

        let sheet = Sheet::from_records(vec![record]).unwrap();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.column_names().unwrap(), &vec!["b".to_string(), "a".to_string()]);
        assert_eq!(sheet.get_by_name(0, "b").unwrap(), &CellValue::Int(1));
        assert_eq!(sheet.get_by_name(0, "a").unwrap(), &CellValue::Null);
    }

    #[test]
    fn test_append_by_position() {
        let mut left = named(vec![vec!["x", "y"], vec!["1", "2"]]);
        let right = named(vec![vec!["p", "q"], vec!["3", "4"]]);

        left.append(&right).unwrap();

        assert_eq!(left.data_row_count(), 2);
        assert_eq!(
            left.get_by_name(1, "x").unwrap(),
            &CellValue::String("3".to_string())
        );
    }

    #[test]
    fn test_append_count_mismatch() {
        let mut left = named(vec![vec!["x", "y"], vec!["1", "2"]]);
        let right = named(vec![vec!["x"], vec!["3"]]);

        assert!(matches!(
            left.append(&right),
            Err(SheetError::ColumnCountMismatch { left: 2, right: 1 })
        ));
    }
}
