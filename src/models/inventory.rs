// src/models/inventory.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::error::AppError;

// --- 1. Products (catalog entries) ---
// The id is the key of the catalog map, so it is not repeated in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub barcode: String,
    pub unit: String,
    pub category: String,
}

// --- 2. Stock key ---
// Composite key of the ledger. Kept as a struct so ids never need a delimiter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockKey {
    pub product_id: String,
    pub location_id: String,
}

impl StockKey {
    pub fn new(product_id: impl Into<String>, location_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            location_id: location_id.into(),
        }
    }
}

// --- 3. Stock entry (one persisted ledger row) ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    pub product_id: String,
    pub location_id: String,
    pub quantity: i64,
}

// --- 4. Stock row (ledger joined with catalog and locations) ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub product_id: String,
    pub product_name: String,
    pub barcode: String,
    pub location_id: String,
    pub location_description: String,
    pub quantity: i64,
    pub unit: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockFilter {
    All,
    ZeroStock,
    HasStock,
    // FIXME: matches exactly like ZeroStock (quantity == 0). There is no
    // threshold behind "low" yet; needs a product-owner decision before it
    // is changed.
    LowStock,
}

impl StockFilter {
    /// Unknown filter names fall back to `All`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "zero_stock" => Self::ZeroStock,
            "has_stock" => Self::HasStock,
            "low_stock" => Self::LowStock,
            _ => Self::All,
        }
    }

    pub fn matches(self, quantity: i64) -> bool {
        match self {
            Self::All => true,
            Self::ZeroStock | Self::LowStock => quantity == 0,
            Self::HasStock => quantity != 0,
        }
    }
}

/// Free-text plus stock-level filter applied to the joined stock rows.
#[derive(Debug, Clone)]
pub struct StockQuery {
    pub text: Option<String>,
    pub filter: StockFilter,
}

impl Default for StockQuery {
    fn default() -> Self {
        Self {
            text: None,
            filter: StockFilter::All,
        }
    }
}

impl StockQuery {
    pub fn matches(&self, row: &StockRow) -> bool {
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            let needle = text.to_lowercase();
            // Barcodes are compared as stored, so only the needle is lower-cased.
            let hit = row.product_name.to_lowercase().contains(&needle)
                || row.barcode.contains(&needle)
                || row.location_description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        self.filter.matches(row.quantity)
    }
}

// --- 5. Quantity as typed by the user ---
// Forms send numbers as text, API clients as JSON numbers; both are accepted
// and anything else is rejected when parsed. A missing field deserializes as
// `Other(Null)` so it fails at parse time, after the id checks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RawQuantity {
    pub fn parse(&self) -> Result<i64, AppError> {
        match self {
            RawQuantity::Integer(n) => Ok(*n),
            RawQuantity::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidInput(format!("quantity {text:?} is not an integer"))),
            RawQuantity::Other(serde_json::Value::Null) => {
                Err(AppError::InvalidInput("quantity is required".to_string()))
            }
            RawQuantity::Other(value) => Err(AppError::InvalidInput(format!(
                "quantity {value} is not an integer"
            ))),
        }
    }
}

impl Default for RawQuantity {
    fn default() -> Self {
        RawQuantity::Other(serde_json::Value::Null)
    }
}

// --- 6. Transactions (history) ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    // Aliases keep data files written by the previous tracker readable.
    #[serde(alias = "入庫")]
    Inbound,
    #[serde(alias = "出庫")]
    Outbound,
    #[serde(alias = "盤點")]
    StockCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(alias = "product_id")]
    pub product_id: String,
    #[serde(alias = "location_id")]
    pub location_id: String,
    /// Units moved for inbound/outbound; `actual - system` for a stock count.
    pub quantity: i64,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

impl Transaction {
    pub fn references_product(&self, product_id: &str) -> bool {
        self.product_id == product_id
    }

    pub fn references_location(&self, location_id: &str) -> bool {
        self.location_id == location_id
    }
}
