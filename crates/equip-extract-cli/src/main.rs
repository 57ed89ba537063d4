//! equip-extract - convert the equipment workbook to a JSON catalog
//!
//! One-shot batch converter: reads `equipement.xlsx` from the working
//! directory, normalizes every row of the twelve category sheets, and
//! writes `equipment.json`. No flags, no configuration; any failure
//! aborts the run with a non-zero exit.

use anyhow::{Context, Result};
use equip_extract_core::{extract_items, to_json, SHEET_NAMES};
use equip_extract_xlsx::WorkbookLoader;

/// Source workbook, resolved against the working directory
const INPUT_PATH: &str = "equipement.xlsx";

/// Output document, overwritten on every run
const OUTPUT_PATH: &str = "equipment.json";

fn main() -> Result<()> {
    let tables = WorkbookLoader::load_file(INPUT_PATH, &SHEET_NAMES)
        .with_context(|| format!("Failed to load '{INPUT_PATH}'"))?;

    let records = extract_items(&tables).context("Failed to normalize workbook rows")?;

    let json = to_json(&records).context("Failed to render JSON")?;
    std::fs::write(OUTPUT_PATH, json)
        .with_context(|| format!("Failed to write '{OUTPUT_PATH}'"))?;

    eprintln!("Wrote {} records to '{OUTPUT_PATH}'", records.len());
    Ok(())
}
