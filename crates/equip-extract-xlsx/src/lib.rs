//! # equip-extract-xlsx
//!
//! Workbook loader for equip-extract, backed by `calamine`.
//!
//! Turns the named sheets of an XLSX workbook into
//! [`SheetTable`](equip_extract_core::SheetTable) values for the core
//! crate's normalization pipeline.

mod error;
mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::WorkbookLoader;
