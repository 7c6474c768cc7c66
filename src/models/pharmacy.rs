use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stock below this count is flagged as low.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// A medicine in the pharmacy inventory. `stock_quantity` is the stored
/// fact; the out/low/in classification is derived on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PharmacyItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub generic_name: String,
    #[serde(default)]
    pub category: String,
    pub stock_quantity: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl PharmacyItem {
    /// Derived stock classification shown as a badge in the inventory list.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::for_quantity(self.stock_quantity)
    }
}

/// Derived inventory state: zero is out, under the threshold is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Out,
    Low,
    In,
}

impl StockLevel {
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            StockLevel::Out
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::In
        }
    }

    /// Badge text as displayed in the inventory table.
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Out => "Out of Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::In => "In Stock",
        }
    }
}
