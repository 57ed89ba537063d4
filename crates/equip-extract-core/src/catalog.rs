//! Static catalogs: expected sheet names and the header-to-field mapping.
//!
//! Both tables are fixed at compile time. Sheet order here is the order
//! records appear in the output; mapping order is the order fields are
//! assigned while normalizing a row.

use crate::item::ItemField;

/// The twelve equipment category sheets expected in the source workbook,
/// in processing order.
pub const SHEET_NAMES: [&str; 12] = [
    "Armurerie",
    "Balistique",
    "Bioingénierie",
    "Biotechnologie",
    "Cybernétique",
    "Ingénierie Spécialisée",
    "Matériaux",
    "Mécatronique",
    "Pharmacologie",
    "Programmation",
    "Protection Matérielle",
    "Robotique",
];

/// Source column headers and the item field each one populates.
///
/// Identical for every sheet. Headers present in a sheet but absent from
/// this table are ignored; entries whose header a sheet lacks leave the
/// field at its default empty string.
pub const COLUMN_MAPPING: [(&str, ItemField); 14] = [
    ("Nom", ItemField::Name),
    ("Pré-Requis", ItemField::Prerequisites),
    ("Description & Effet", ItemField::Descriptions),
    ("Prix du marché", ItemField::MarketPrice),
    ("Fabrication : Crédits", ItemField::CostToCraftInCredit),
    ("Fabrication : Ressources", ItemField::RessourcesNeeded),
    ("Temps (minutes)", ItemField::CraftTimeInMinutes),
    ("Temps (downtime)", ItemField::CraftTimeInDowntime),
    ("Max par downtime", ItemField::MaxPerDowntime),
    ("Emplacement", ItemField::Location),
    ("Malfunction", ItemField::Malfunction),
    ("Salaire", ItemField::Salary),
    ("Identification", ItemField::PropDescription),
    ("Compétence", ItemField::SkillNeeded),
];
