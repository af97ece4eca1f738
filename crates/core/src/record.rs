use crate::error::{Result, SummaryError};
use growthsum_sheet::{CellValue, Sheet};
use indexmap::IndexMap;
use serde::Serialize;

/// One assembled summary row: ordered (header, value) pairs with unique headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, CellValue>,
}

impl Record {
    /// Start building a record
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// Number of fields, which is also the output column count
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Headers in output order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Values in output order
    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.fields.values()
    }

    /// Iterate over (header, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// Replace the value of an existing field. Fields cannot be added after
    /// the record is built.
    pub fn set(&mut self, name: &str, value: impl Into<CellValue>) -> Result<()> {
        let slot = self
            .fields
            .get_mut(name)
            .ok_or_else(|| SummaryError::MissingField {
                name: name.to_string(),
            })?;
        *slot = value.into();
        Ok(())
    }

    /// Render as a sheet with a header row and one data row
    pub fn to_sheet(&self, name: &str) -> Result<Sheet> {
        let mut sheet = Sheet::from_records(vec![self.fields.clone()])?;
        sheet.set_name(name);
        Ok(sheet)
    }
}

/// Builds a [`Record`] one (header, value) pair at a time.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    fields: IndexMap<String, CellValue>,
}

impl RecordBuilder {
    /// Append a field at the end of the record
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::DuplicateHeader` if the header is already present.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Result<&mut Self> {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return Err(SummaryError::DuplicateHeader { name });
        }
        self.fields.insert(name, value.into());
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn build(self) -> Record {
        Record {
            fields: self.fields,
        }
    }
}
