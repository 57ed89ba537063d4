//! XLSX workbook reader

use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use log::debug;

use crate::error::{XlsxError, XlsxResult};
use equip_extract_core::{CellValue, SheetTable};

/// Loads the named sheets of an XLSX workbook into [`SheetTable`]s.
pub struct WorkbookLoader;

impl WorkbookLoader {
    /// Load every named sheet from the workbook at `path`, in the order
    /// the names are given.
    ///
    /// Fails with [`XlsxError::SheetNotFound`] if any named sheet is
    /// absent; a missing or unreadable file surfaces as
    /// [`XlsxError::Io`].
    pub fn load_file<P: AsRef<Path>>(
        path: P,
        sheet_names: &[&str],
    ) -> XlsxResult<Vec<SheetTable>> {
        let mut workbook: Xlsx<_> = open_workbook(path.as_ref()).map_err(|e| match e {
            calamine::XlsxError::Io(io) => XlsxError::Io(io),
            other => XlsxError::Workbook(other),
        })?;

        let present = workbook.sheet_names();
        for name in sheet_names {
            if !present.iter().any(|p| p.as_str() == *name) {
                return Err(XlsxError::SheetNotFound((*name).to_string()));
            }
        }

        let mut tables = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            let range = workbook.worksheet_range(name)?;
            let table = Self::table_from_range(name, &range);
            debug!("loaded sheet '{}': {} data rows", name, table.row_count());
            tables.push(table);
        }

        Ok(tables)
    }

    /// Build a table from a sheet's used range: first row is the header
    /// row, the rest are data rows.
    fn table_from_range(name: &str, range: &Range<Data>) -> SheetTable {
        let mut rows = range.rows();

        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(Self::header_text).collect(),
            None => Vec::new(),
        };

        let data: Vec<Vec<CellValue>> = rows
            .map(|row| row.iter().map(Self::convert_cell).collect())
            .collect();

        SheetTable::new(name, headers, data)
    }

    /// Render a header cell to trimmed text
    fn header_text(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        }
    }

    /// Map a calamine cell onto the core value variant
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Missing,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            // Serial date number; downstream treats it like any numeric
            Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}
