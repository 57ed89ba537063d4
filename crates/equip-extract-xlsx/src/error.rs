//! XLSX loader error types

use thiserror::Error;

/// Result type for XLSX loading
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while loading the source workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error (input file missing or unreadable)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally invalid workbook
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// Expected sheet absent from the workbook
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
}
