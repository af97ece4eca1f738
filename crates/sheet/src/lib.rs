//! Sheet/Book module for growthsum
//!
//! Provides a small tabular model over spreadsheet data: a [`Sheet`] is a
//! row-major grid of [`CellValue`]s that can name its columns from a header
//! row, and a [`Book`] is an ordered set of named sheets. Workbooks are read
//! with calamine and written with rust_xlsxwriter.
//!
//! # Examples
//!
//! ## Named column access
//!
//! ```
//! use growthsum_sheet::{CellValue, Sheet};
//!
//! let mut sheet = Sheet::from_data(vec![
//!     vec!["Sample", "Phase"],
//!     vec!["A1", "cubic"],
//! ]);
//!
//! sheet.name_columns_by_row(0).unwrap();
//! let phases = sheet.column_values("Phase").unwrap();
//! assert_eq!(phases, vec![CellValue::String("cubic".to_string())]);
//! ```
//!
//! ## Loading one section of a workbook
//!
//! ```no_run
//! use growthsum_sheet::{Sheet, XlsxReadOptions};
//!
//! let options = XlsxReadOptions::default()
//!     .with_headers(true)
//!     .with_comment_prefix("#")
//!     .with_string_column("Sample");
//! let overview = Sheet::from_xlsx_sheet("run42.xlsx", "Overview", &options).unwrap();
//! ```

mod book;
mod cell;
mod error;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export XLSX read options.
pub use xlsx::XlsxReadOptions;
