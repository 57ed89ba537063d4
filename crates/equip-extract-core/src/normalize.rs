//! Cell and row normalization.
//!
//! Every output field is text. The coercion order matters: the numeric
//! branch runs before the dash test, and the dash test compares the raw
//! text before trimming, so a padded `" - "` trims to `"-"` instead of
//! blanking.

use crate::catalog::COLUMN_MAPPING;
use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::item::Item;
use crate::table::SheetTable;

/// Coerce one raw cell value to its output text.
///
/// - `Missing` and the literal placeholder `-` become the empty string
/// - numbers render via [`format_number`]
/// - text is trimmed of leading/trailing whitespace
///
/// Error cells are the one uncoercible case; the error carries the
/// cell's display text.
pub fn normalize_cell(value: &CellValue) -> std::result::Result<String, String> {
    match value {
        CellValue::Missing => Ok(String::new()),
        CellValue::Int(i) => Ok(i.to_string()),
        CellValue::Float(f) => Ok(format_number(*f)),
        CellValue::Text(s) if s == "-" => Ok(String::new()),
        CellValue::Text(s) => Ok(s.trim().to_string()),
        CellValue::Error(e) => Err(format!("spreadsheet error value {e}")),
    }
}

/// Render a float with no formatting artifacts.
///
/// Integral finite values within `i64` range render without a decimal
/// point (`150.0` -> `"150"`); everything else uses the shortest
/// round-trip `f64` form.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Normalize one data row of a table into an [`Item`].
///
/// Applies [`COLUMN_MAPPING`] in declaration order. Headers the sheet
/// lacks leave their field empty; headers the mapping lacks are ignored.
pub fn normalize_row(table: &SheetTable, row_index: usize) -> Result<Item> {
    let row = &table.rows()[row_index];
    let mut item = Item::default();

    for (header, field) in &COLUMN_MAPPING {
        let Some(col) = table.column_index(header) else {
            continue;
        };

        let text = normalize_cell(&row[col]).map_err(|detail| Error::TypeCoercion {
            sheet: table.name().to_string(),
            row: row_index,
            column: (*header).to_string(),
            detail,
        })?;

        item.set_field(*field, text);
    }

    Ok(item)
}
