use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// The worksheets of one workbook, in file order
#[derive(Debug, Clone, Default)]
pub struct Book {
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet names in file order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Remove a sheet by name and hand it to the caller.
    ///
    /// The remaining sheets keep their order.
    pub fn take_sheet(&mut self, name: &str) -> Result<Sheet> {
        self.sheets
            .shift_remove(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Add a sheet under `name`; the sheet takes that name.
    pub fn add_sheet(&mut self, name: &str, mut sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Sheet)> {
        self.sheets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sheet_takes_book_name() {
        let mut book = Book::new();
        book.add_sheet("Overview", Sheet::with_name("Sheet9")).unwrap();

        assert_eq!(book.sheet_names(), vec!["Overview"]);
        assert_eq!(book.take_sheet("Overview").unwrap().name(), "Overview");
    }

    #[test]
    fn test_add_duplicate_sheet() {
        let mut book = Book::new();
        book.add_sheet("HRXRD", Sheet::new()).unwrap();

        assert!(matches!(
            book.add_sheet("HRXRD", Sheet::new()),
            Err(SheetError::SheetAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_take_sheet_preserves_order() {
        let mut book = Book::new();
        for name in ["Overview", "GrowthRun", "HRXRD"] {
            book.add_sheet(name, Sheet::new()).unwrap();
        }

        let taken = book.take_sheet("GrowthRun").unwrap();

        assert_eq!(taken.name(), "GrowthRun");
        assert_eq!(book.sheet_names(), vec!["Overview", "HRXRD"]);
        assert!(matches!(
            book.take_sheet("GrowthRun"),
            Err(SheetError::SheetNotFound { .. })
        ));
    }
}
