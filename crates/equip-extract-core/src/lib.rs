//! # equip-extract-core
//!
//! Data model and normalization pipeline for the equipment catalog
//! converter.
//!
//! This crate provides the fundamental types used throughout equip-extract:
//! - [`CellValue`] - Raw cell values at the loader boundary (text, numbers, missing)
//! - [`SheetTable`] - One loaded sheet as headers plus rows
//! - [`Item`] and [`ItemRecord`] - The normalized equipment record
//! - [`extract_items`] - The sheet-to-records batch assembler
//!
//! ## Example
//!
//! ```rust
//! use equip_extract_core::{CellValue, SheetTable, extract_items};
//!
//! let table = SheetTable::new(
//!     "Armurerie",
//!     vec!["Nom".into(), "Prix du marché".into()],
//!     vec![vec![CellValue::Text("Pistolet".into()), CellValue::Int(150)]],
//! );
//!
//! let records = extract_items(&[table]).unwrap();
//! assert_eq!(records[0].category, "Armurerie");
//! assert_eq!(records[0].item.name, "Pistolet");
//! assert_eq!(records[0].item.market_price, "150");
//! ```

pub mod catalog;
pub mod cell;
pub mod error;
pub mod extract;
pub mod item;
pub mod normalize;
pub mod table;

// Re-exports for convenience
pub use catalog::{COLUMN_MAPPING, SHEET_NAMES};
pub use cell::CellValue;
pub use error::{Error, Result};
pub use extract::{extract_items, to_json};
pub use item::{Item, ItemField, ItemRecord};
pub use normalize::normalize_row;
pub use table::SheetTable;
