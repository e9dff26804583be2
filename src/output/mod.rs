//! Output formatting for allocation results.
//!
//! This module handles rendering and exporting an [`Allocation`](crate::models::Allocation):
//! - [`terminal`] - Human readable report and error messages
//! - [`csv`] - CSV output
//! - [`json`] - JSON output
//! - [`xlsx`] - Spreadsheet export

mod csv;
mod json;
mod terminal;
mod xlsx;

pub use csv::{escape_csv_field, write_csv, CSV_HEADER};
pub use json::to_json;
pub use terminal::{format_label, write_error, write_report};
pub use xlsx::{export_xlsx, resolve_filename, DEFAULT_FILENAME, XLSX_EXTENSION};
