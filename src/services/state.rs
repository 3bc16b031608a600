// src/services/state.rs

use crate::{
    common::error::{AppError, Entity},
    db::persistence::Snapshot,
    models::{
        inventory::{Product, StockQuery, StockRow},
        location::Location,
    },
    services::{
        catalog::{LocationDirectory, ProductCatalog},
        journal::TransactionLog,
        ledger::StockLedger,
    },
};

/// Everything the tracker knows, in memory. Owned by `InventoryRepository`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryState {
    pub catalog: ProductCatalog,
    pub locations: LocationDirectory,
    pub ledger: StockLedger,
    pub journal: TransactionLog,
}

impl InventoryState {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            catalog: ProductCatalog::from_map(snapshot.products),
            locations: LocationDirectory::from_map(snapshot.locations),
            ledger: StockLedger::from_entries(snapshot.stocks),
            journal: TransactionLog::from_entries(snapshot.transactions),
        }
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            products: self.catalog.as_map().clone(),
            locations: self.locations.as_map().clone(),
            stocks: self.ledger.to_entries(),
            transactions: self.journal.entries().to_vec(),
        }
    }

    pub fn product(&self, id: &str) -> Result<&Product, AppError> {
        self.catalog
            .get(id)
            .ok_or_else(|| AppError::NotFound(Entity::Product, id.to_string()))
    }

    pub fn location(&self, id: &str) -> Result<&Location, AppError> {
        self.locations
            .get(id)
            .ok_or_else(|| AppError::NotFound(Entity::Location, id.to_string()))
    }

    fn ensure_pair(&self, product_id: &str, location_id: &str) -> Result<(), AppError> {
        self.product(product_id)?;
        self.location(location_id)?;
        Ok(())
    }

    fn ensure_positive(qty: i64) -> Result<(), AppError> {
        if qty <= 0 {
            return Err(AppError::InvalidInput(format!(
                "quantity must be greater than zero, got {qty}"
            )));
        }
        Ok(())
    }

    /// Returns the quantity after the credit.
    pub fn credit(&mut self, product_id: &str, location_id: &str, qty: i64) -> Result<i64, AppError> {
        self.ensure_pair(product_id, location_id)?;
        Self::ensure_positive(qty)?;
        self.ledger.credit(product_id, location_id, qty).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "receiving {qty} would exceed the largest quantity {product_id} can hold at {location_id}"
            ))
        })
    }

    /// Returns the quantity after the debit.
    pub fn debit(&mut self, product_id: &str, location_id: &str, qty: i64) -> Result<i64, AppError> {
        self.ensure_pair(product_id, location_id)?;
        Self::ensure_positive(qty)?;
        let unit = self.product(product_id)?.unit.clone();
        self.ledger
            .debit(product_id, location_id, qty)
            .map_err(|shortfall| AppError::InsufficientStock {
                available: shortfall.available,
                requested: shortfall.requested,
                unit,
            })
    }

    /// Overwrites the counted quantity and returns `actual - previous`.
    pub fn set_actual(&mut self, product_id: &str, location_id: &str, actual: i64) -> Result<i64, AppError> {
        self.ensure_pair(product_id, location_id)?;
        if actual < 0 {
            return Err(AppError::InvalidInput(format!(
                "counted quantity cannot be negative, got {actual}"
            )));
        }
        Ok(self.ledger.set_actual(product_id, location_id, actual))
    }

    pub fn stock_rows<'a>(&'a self, query: &'a StockQuery) -> impl Iterator<Item = StockRow> + 'a {
        self.ledger.rows(&self.catalog, &self.locations, query)
    }

    pub fn product_in_use(&self, id: &str) -> bool {
        self.ledger.references_product(id) || self.journal.references_product(id)
    }

    pub fn location_in_use(&self, id: &str) -> bool {
        self.ledger.references_location(id) || self.journal.references_location(id)
    }

    /// Deletes a product that no stock row and no transaction mentions.
    pub fn delete_product(&mut self, id: &str) -> Result<Product, AppError> {
        self.product(id)?;
        if self.product_in_use(id) {
            return Err(AppError::ReferencedEntity(Entity::Product, id.to_string()));
        }
        self.catalog.remove(id)
    }

    pub fn delete_location(&mut self, id: &str) -> Result<Location, AppError> {
        self.location(id)?;
        if self.location_in_use(id) {
            return Err(AppError::ReferencedEntity(Entity::Location, id.to_string()));
        }
        self.locations.remove(id)
    }
}
