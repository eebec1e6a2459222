//! Export module for the expense tracker
//!
//! - CSV: spreadsheet-compatible expense export

pub mod csv;

pub use self::csv::{export_expenses_csv, export_to_file, CSV_HEADER};
