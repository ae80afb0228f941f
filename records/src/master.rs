//! Master data: vendors, catalogue, organisation and accounting periods.
//!
//! These records are referenced by numeric id from the transaction records
//! and resolved to labels on the client for display.

#[cfg(test)]
#[path = "master_test.rs"]
mod master_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A supplier purchase orders are raised against.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gst_number: Option<String>,
}

impl Resource for Vendor {
    const PATH: &'static str = "vendors";
    const KEY: &'static str = "vendor";
    const TITLE: &'static str = "Vendor";
    const PLURAL: &'static str = "Vendors";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// Unit of measure for items (e.g. "Kilogram" / "kg").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
}

impl Resource for Unit {
    const PATH: &'static str = "units";
    const KEY: &'static str = "unit";
    const TITLE: &'static str = "Unit";
    const PLURAL: &'static str = "Units";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.abbreviation.clone()
    }
}

/// Item category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Category {
    const PATH: &'static str = "categories";
    const KEY: &'static str = "category";
    const TITLE: &'static str = "Category";
    const PLURAL: &'static str = "Categories";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// A purchasable catalogue item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub code: String,
    pub category_id: i64,
    pub unit_id: i64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Item {
    const PATH: &'static str = "items";
    const KEY: &'static str = "item";
    const TITLE: &'static str = "Item";
    const PLURAL: &'static str = "Items";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// An institute that orders and receives goods.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Institute {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl Resource for Institute {
    const PATH: &'static str = "institutes";
    const KEY: &'static str = "institute";
    const TITLE: &'static str = "Institute";
    const PLURAL: &'static str = "Institutes";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// A store location belonging to an institute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub institute_id: i64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Location {
    const PATH: &'static str = "locations";
    const KEY: &'static str = "location";
    const TITLE: &'static str = "Location";
    const PLURAL: &'static str = "Locations";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// Accounting period purchase orders are booked against.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct FinancialYear {
    #[serde(default)]
    pub id: i64,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_active: bool,
}

impl FinancialYear {
    /// Whether `date` falls inside this period, bounds inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl Resource for FinancialYear {
    const PATH: &'static str = "financial-years";
    const KEY: &'static str = "financialYear";
    const TITLE: &'static str = "Financial Year";
    const PLURAL: &'static str = "Financial Years";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}
