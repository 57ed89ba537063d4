//! Raw cell values at the loader boundary.

use std::fmt;

/// The value of one cell as delivered by the workbook loader.
///
/// Spreadsheet libraries hand back a mix of text, numbers and empty
/// markers; this variant pins that down before normalization so the
/// coercion rules can be an explicit match instead of dynamic type
/// checks.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Textual cell content
    Text(String),

    /// Integer cell content
    Int(i64),

    /// Floating-point cell content
    Float(f64),

    /// Empty or absent cell (the library's null sentinel)
    Missing,

    /// Spreadsheet error cell (e.g. `#DIV/0!`); rejected by normalization
    Error(String),
}

impl CellValue {
    /// Check whether this is the missing-value sentinel
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Missing => Ok(()),
            CellValue::Error(e) => write!(f, "{e}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}
