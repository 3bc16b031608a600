// src/services/ledger.rs

use std::collections::BTreeMap;

use crate::models::inventory::{StockEntry, StockKey, StockQuery, StockRow};
use crate::services::catalog::{LocationDirectory, ProductCatalog};

/// A debit larger than what is on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub available: i64,
    pub requested: i64,
}

/// On-hand quantity per (product, location). A missing row means zero.
///
/// The ledger does not know the catalog; id checks happen in
/// `InventoryState` before any of these are called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLedger {
    entries: BTreeMap<StockKey, i64>,
}

impl StockLedger {
    pub fn from_entries(entries: impl IntoIterator<Item = StockEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (StockKey::new(e.product_id, e.location_id), e.quantity))
            .collect();
        Self { entries }
    }

    pub fn to_entries(&self) -> Vec<StockEntry> {
        self.entries
            .iter()
            .map(|(key, &quantity)| StockEntry {
                product_id: key.product_id.clone(),
                location_id: key.location_id.clone(),
                quantity,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn quantity(&self, product_id: &str, location_id: &str) -> i64 {
        self.entries
            .get(&StockKey::new(product_id, location_id))
            .copied()
            .unwrap_or(0)
    }

    /// Adds `qty` and returns the new quantity, or `None` (ledger untouched)
    /// if the sum does not fit.
    pub fn credit(&mut self, product_id: &str, location_id: &str, qty: i64) -> Option<i64> {
        let key = StockKey::new(product_id, location_id);
        let current = self.entries.get(&key).copied().unwrap_or(0);
        let next = current.checked_add(qty)?;
        self.entries.insert(key, next);
        Some(next)
    }

    /// Subtracts `qty` unless that would go below zero; the ledger is left
    /// untouched on failure.
    pub fn debit(&mut self, product_id: &str, location_id: &str, qty: i64) -> Result<i64, Shortfall> {
        let available = self.quantity(product_id, location_id);
        if available < qty {
            return Err(Shortfall {
                available,
                requested: qty,
            });
        }
        let remaining = available - qty;
        self.entries
            .insert(StockKey::new(product_id, location_id), remaining);
        Ok(remaining)
    }

    /// Overwrites the quantity and returns `actual - previous`.
    pub fn set_actual(&mut self, product_id: &str, location_id: &str, actual: i64) -> i64 {
        let previous = self
            .entries
            .insert(StockKey::new(product_id, location_id), actual)
            .unwrap_or(0);
        actual - previous
    }

    /// Saturates at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.entries
            .values()
            .fold(0i64, |total, &quantity| total.saturating_add(quantity))
    }

    /// True if any row exists for the product, whatever its quantity.
    pub fn references_product(&self, product_id: &str) -> bool {
        self.entries.keys().any(|k| k.product_id == product_id)
    }

    pub fn references_location(&self, location_id: &str) -> bool {
        self.entries.keys().any(|k| k.location_id == location_id)
    }

    /// Ledger rows joined with their product and location, filtered by
    /// `query`. Rows pointing at a product or location that no longer exists
    /// are skipped. The iterator can be recreated at will.
    pub fn rows<'a>(
        &'a self,
        catalog: &'a ProductCatalog,
        locations: &'a LocationDirectory,
        query: &'a StockQuery,
    ) -> impl Iterator<Item = StockRow> + 'a {
        self.entries
            .iter()
            .filter_map(move |(key, &quantity)| {
                let product = catalog.get(&key.product_id)?;
                let location = locations.get(&key.location_id)?;
                Some(StockRow {
                    product_id: key.product_id.clone(),
                    product_name: product.name.clone(),
                    barcode: product.barcode.clone(),
                    location_id: key.location_id.clone(),
                    location_description: location.description.clone(),
                    quantity,
                    unit: product.unit.clone(),
                    category: product.category.clone(),
                })
            })
            .filter(move |row| query.matches(row))
    }
}
