//! The normalized equipment record.

use serde::Serialize;

/// One equipment item: fourteen textual attributes, all defaulting to the
/// empty string. Serializes with the output field names (camelCase).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub prerequisites: String,
    pub descriptions: String,
    pub market_price: String,
    pub cost_to_craft_in_credit: String,
    pub ressources_needed: String,
    pub craft_time_in_minutes: String,
    pub craft_time_in_downtime: String,
    pub max_per_downtime: String,
    pub location: String,
    pub malfunction: String,
    pub salary: String,
    pub prop_description: String,
    pub skill_needed: String,
}

/// Identifies one of the fourteen item fields.
///
/// Assignment by field goes through [`Item::set_field`], a compile-time
/// match rather than any by-name lookup at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Prerequisites,
    Descriptions,
    MarketPrice,
    CostToCraftInCredit,
    RessourcesNeeded,
    CraftTimeInMinutes,
    CraftTimeInDowntime,
    MaxPerDowntime,
    Location,
    Malfunction,
    Salary,
    PropDescription,
    SkillNeeded,
}

impl Item {
    /// Assign a normalized value to the given field
    pub fn set_field(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Name => self.name = value,
            ItemField::Prerequisites => self.prerequisites = value,
            ItemField::Descriptions => self.descriptions = value,
            ItemField::MarketPrice => self.market_price = value,
            ItemField::CostToCraftInCredit => self.cost_to_craft_in_credit = value,
            ItemField::RessourcesNeeded => self.ressources_needed = value,
            ItemField::CraftTimeInMinutes => self.craft_time_in_minutes = value,
            ItemField::CraftTimeInDowntime => self.craft_time_in_downtime = value,
            ItemField::MaxPerDowntime => self.max_per_downtime = value,
            ItemField::Location => self.location = value,
            ItemField::Malfunction => self.malfunction = value,
            ItemField::Salary => self.salary = value,
            ItemField::PropDescription => self.prop_description = value,
            ItemField::SkillNeeded => self.skill_needed = value,
        }
    }
}

/// An [`Item`] tagged with the sheet it came from.
///
/// Serializes flat: the fourteen item fields in declaration order, then
/// `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    #[serde(flatten)]
    pub item: Item,
    pub category: String,
}
