//! Error types for equip-extract-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while normalizing and assembling records
#[derive(Debug, Error)]
pub enum Error {
    /// A cell value of a type the normalization rules cannot coerce to text
    #[error("Cannot coerce cell in sheet '{sheet}', row {row}, column '{column}': {detail}")]
    TypeCoercion {
        sheet: String,
        row: usize,
        column: String,
        detail: String,
    },

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
