//! One loaded sheet as a header row plus data rows.

use crate::cell::CellValue;

/// Tabular content of a single sheet.
///
/// Rows are aligned with `headers`: every row has exactly `headers.len()`
/// cells, padded with [`CellValue::Missing`] where the source row was
/// shorter.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Create a table, padding or truncating each row to header width
    pub fn new<S: Into<String>>(
        name: S,
        headers: Vec<String>,
        mut rows: Vec<Vec<CellValue>>,
    ) -> Self {
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, CellValue::Missing);
        }
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Sheet name (the equipment category)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header row, in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in sheet order
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the sheet has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column with the given header, if present
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_are_padded_to_header_width() {
        let table = SheetTable::new(
            "Armurerie",
            vec!["Nom".into(), "Prix du marché".into(), "Compétence".into()],
            vec![vec![CellValue::Text("Pistolet".into())]],
        );
        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.rows()[0][1], CellValue::Missing);
    }

    #[test]
    fn rows_are_truncated_to_header_width() {
        let table = SheetTable::new(
            "Robotique",
            vec!["Nom".into()],
            vec![vec![
                CellValue::Text("Drone".into()),
                CellValue::Int(3),
            ]],
        );
        assert_eq!(table.rows()[0], vec![CellValue::Text("Drone".into())]);
    }

    #[test]
    fn column_index_finds_exact_header() {
        let table = SheetTable::new(
            "Matériaux",
            vec!["Nom".into(), "Emplacement".into()],
            Vec::new(),
        );
        assert_eq!(table.column_index("Emplacement"), Some(1));
        assert_eq!(table.column_index("Inconnu"), None);
        assert!(table.is_empty());
    }
}
