//! Batch assembly of loaded sheets into the output record list.

use log::debug;

use crate::error::Result;
use crate::item::ItemRecord;
use crate::normalize::normalize_row;
use crate::table::SheetTable;

/// Normalize every row of every table into one flat record list.
///
/// Tables are processed in the order given (the loader emits them in
/// enumeration order); row order is preserved within a sheet. Sheets with
/// zero data rows contribute nothing. Each record's `category` is the
/// exact sheet name, untouched by normalization.
pub fn extract_items(tables: &[SheetTable]) -> Result<Vec<ItemRecord>> {
    let mut records = Vec::new();

    for table in tables {
        if table.is_empty() {
            debug!("sheet '{}' has no data rows, skipping", table.name());
            continue;
        }

        for row_index in 0..table.row_count() {
            let item = normalize_row(table, row_index)?;
            records.push(ItemRecord {
                item,
                category: table.name().to_string(),
            });
        }

        debug!(
            "sheet '{}': {} records assembled",
            table.name(),
            table.row_count()
        );
    }

    Ok(records)
}

/// Render the record list as a pretty-printed JSON array.
///
/// Two-space indentation; non-ASCII characters are written literally, not
/// escaped.
pub fn to_json(records: &[ItemRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use pretty_assertions::assert_eq;

    fn armurerie_one_row() -> SheetTable {
        SheetTable::new(
            "Armurerie",
            vec![
                "Nom".into(),
                "Prix du marché".into(),
                "Compétence".into(),
            ],
            vec![vec![
                CellValue::Text("Pistolet".into()),
                CellValue::Int(150),
                CellValue::Text("-".into()),
            ]],
        )
    }

    #[test]
    fn single_row_sheet_yields_one_tagged_record() {
        let records = extract_items(&[armurerie_one_row()]).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.category, "Armurerie");
        assert_eq!(record.item.name, "Pistolet");
        assert_eq!(record.item.market_price, "150");
        assert_eq!(record.item.skill_needed, "");
        assert_eq!(record.item.prerequisites, "");
        assert_eq!(record.item.location, "");
    }

    #[test]
    fn empty_sheets_are_skipped_without_error() {
        let empty = SheetTable::new("Balistique", vec!["Nom".into()], Vec::new());
        let records = extract_items(&[empty, armurerie_one_row()]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Armurerie");
    }

    #[test]
    fn record_count_is_sum_of_row_counts() {
        let rows =
            |n: usize| (0..n).map(|i| vec![CellValue::Int(i as i64)]).collect::<Vec<_>>();
        let tables = vec![
            SheetTable::new("Armurerie", vec!["Nom".into()], rows(3)),
            SheetTable::new("Balistique", vec!["Nom".into()], Vec::new()),
            SheetTable::new("Robotique", vec!["Nom".into()], rows(2)),
        ];

        let records = extract_items(&tables).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].category, "Armurerie");
        assert_eq!(records[3].category, "Robotique");
    }

    #[test]
    fn sheet_and_row_order_are_preserved() {
        let tables = vec![
            SheetTable::new(
                "Armurerie",
                vec!["Nom".into()],
                vec![
                    vec![CellValue::Text("A".into())],
                    vec![CellValue::Text("B".into())],
                ],
            ),
            SheetTable::new(
                "Robotique",
                vec!["Nom".into()],
                vec![vec![CellValue::Text("C".into())]],
            ),
        ];

        let names: Vec<String> = extract_items(&tables)
            .unwrap()
            .into_iter()
            .map(|r| r.item.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn all_empty_row_still_emits_a_record() {
        let table = SheetTable::new(
            "Matériaux",
            vec!["Nom".into(), "Emplacement".into()],
            vec![vec![CellValue::Missing, CellValue::Missing]],
        );

        let records = extract_items(&[table]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item.name, "");
        assert_eq!(records[0].item.location, "");
    }

    #[test]
    fn json_keeps_accents_literal_and_category_last() {
        let table = SheetTable::new(
            "Bioingénierie",
            vec!["Nom".into()],
            vec![vec![CellValue::Text("Greffe neurale".into())]],
        );

        let json = to_json(&extract_items(&[table]).unwrap()).unwrap();
        assert!(json.contains("Bioingénierie"), "accents must not be escaped");
        assert!(json.contains("\"name\": \"Greffe neurale\""));

        // category is the last key of each object
        let category_pos = json.find("\"category\"").unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        assert!(name_pos < category_pos);
    }

    #[test]
    fn json_is_a_two_space_indented_array() {
        let json = to_json(&extract_items(&[armurerie_one_row()]).unwrap()).unwrap();
        assert!(json.starts_with("[\n  {\n    \""));
        assert!(json.ends_with("}\n]"));
    }

    #[test]
    fn empty_input_renders_an_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
