// src/services/inventory_service.rs

use crate::{
    common::error::AppError,
    db::InventoryRepository,
    models::{
        inventory::{Product, RawQuantity, StockQuery, StockRow, Transaction, TransactionType},
        location::Location,
        outcome::OperationReceipt,
    },
};

/// What a completed movement reports back: the receipt plus the product and
/// location it touched, for the summary message.
#[derive(Debug, Clone)]
pub struct MovementReport {
    pub receipt: OperationReceipt,
    pub product: Product,
    pub location: Location,
}

#[derive(Clone)]
pub struct InventoryService {
    inventory_repo: InventoryRepository,
}

impl InventoryService {
    pub fn new(inventory_repo: InventoryRepository) -> Self {
        Self { inventory_repo }
    }

    // --- INBOUND (credit) ---
    pub fn inbound(&self, product_id: &str, location_id: &str, quantity: &RawQuantity) -> Result<MovementReport, AppError> {
        self.inventory_repo.write(|state| {
            let product = state.product(product_id)?.clone();
            let location = state.location(location_id)?.clone();
            let qty = quantity.parse()?;

            let before = state.ledger.quantity(product_id, location_id);
            let after = state.credit(product_id, location_id, qty)?;
            let transaction = state
                .journal
                .record(TransactionType::Inbound, product_id, location_id, qty);

            tracing::info!(product_id, location_id, qty, after, "inbound recorded");
            Ok(MovementReport {
                receipt: OperationReceipt {
                    transaction,
                    quantity_before: before,
                    quantity_after: after,
                    delta: qty,
                },
                product,
                location,
            })
        })
    }

    // --- OUTBOUND (debit) ---
    pub fn outbound(&self, product_id: &str, location_id: &str, quantity: &RawQuantity) -> Result<MovementReport, AppError> {
        self.inventory_repo.write(|state| {
            let product = state.product(product_id)?.clone();
            let location = state.location(location_id)?.clone();
            let qty = quantity.parse()?;

            let before = state.ledger.quantity(product_id, location_id);
            let after = state.debit(product_id, location_id, qty).inspect_err(|e| {
                tracing::info!(product_id, location_id, qty, error = %e, "outbound rejected");
            })?;
            let transaction = state
                .journal
                .record(TransactionType::Outbound, product_id, location_id, qty);

            tracing::info!(product_id, location_id, qty, after, "outbound recorded");
            Ok(MovementReport {
                receipt: OperationReceipt {
                    transaction,
                    quantity_before: before,
                    quantity_after: after,
                    delta: -qty,
                },
                product,
                location,
            })
        })
    }

    // --- STOCK COUNT (overwrite with the counted quantity) ---
    pub fn stock_count(&self, product_id: &str, location_id: &str, actual: &RawQuantity) -> Result<MovementReport, AppError> {
        self.inventory_repo.write(|state| {
            let product = state.product(product_id)?.clone();
            let location = state.location(location_id)?.clone();
            let actual = actual.parse()?;

            let system = state.ledger.quantity(product_id, location_id);
            let difference = state.set_actual(product_id, location_id, actual)?;
            // A zero difference is still logged: the count itself happened.
            let transaction = state
                .journal
                .record(TransactionType::StockCount, product_id, location_id, difference);

            tracing::info!(product_id, location_id, system, actual, difference, "stock count recorded");
            Ok(MovementReport {
                receipt: OperationReceipt {
                    transaction,
                    quantity_before: system,
                    quantity_after: actual,
                    delta: difference,
                },
                product,
                location,
            })
        })
    }

    /// Current quantity of a pair; unknown pairs are simply zero.
    pub fn stock_level(&self, product_id: &str, location_id: &str) -> i64 {
        self.inventory_repo
            .read(|state| state.ledger.quantity(product_id, location_id))
    }

    pub fn search(&self, query: &StockQuery) -> Vec<StockRow> {
        self.inventory_repo
            .read(|state| state.stock_rows(query).collect())
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.inventory_repo
            .read(|state| state.journal.entries().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::common::error::Entity;
    use crate::db::MemoryStore;
    use crate::models::inventory::StockFilter;
    use crate::services::state::InventoryState;

    fn qty(n: i64) -> RawQuantity {
        RawQuantity::Integer(n)
    }

    struct Fixture {
        service: InventoryService,
        repo: InventoryRepository,
        store: Arc<MemoryStore>,
        product_id: String,
        location_id: String,
    }

    fn fixture() -> Fixture {
        let mut state = InventoryState::default();
        let product_id = state
            .catalog
            .add(Product {
                name: "Widget".into(),
                barcode: "999".into(),
                unit: "ea".into(),
                category: "parts".into(),
            })
            .unwrap();
        let location_id = state.locations.add(Location {
            description: "Shelf1".into(),
        });
        let store = Arc::new(MemoryStore::new());
        let repo = InventoryRepository::new(state, store.clone());
        Fixture {
            service: InventoryService::new(repo.clone()),
            repo,
            store,
            product_id,
            location_id,
        }
    }

    #[test]
    fn receiving_shipping_and_counting_a_widget() {
        let f = fixture();
        let (p, l) = (f.product_id.as_str(), f.location_id.as_str());

        let report = f.service.inbound(p, l, &qty(10)).unwrap();
        assert_eq!(report.receipt.quantity_after, 10);
        let rows = f.service.search(&StockQuery::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 10);

        f.service.outbound(p, l, &qty(3)).unwrap();
        assert_eq!(f.service.stock_level(p, l), 7);

        let err = f.service.outbound(p, l, &qty(10)).unwrap_err();
        assert!(matches!(err, AppError::InsufficientStock { available: 7, .. }));
        assert_eq!(f.service.stock_level(p, l), 7);

        let report = f.service.stock_count(p, l, &qty(5)).unwrap();
        assert_eq!(report.receipt.delta, -2);
        assert_eq!(report.receipt.transaction.quantity, -2);
        assert_eq!(report.receipt.transaction.kind, TransactionType::StockCount);
        assert_eq!(f.service.stock_level(p, l), 5);

        let kinds: Vec<_> = f.service.transactions().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionType::Inbound,
                TransactionType::Outbound,
                TransactionType::StockCount
            ]
        );
        // One flush per successful operation, none for the rejected outbound.
        assert_eq!(f.store.save_count(), 3);
    }

    #[test]
    fn ids_are_checked_before_quantity_is_parsed() {
        let f = fixture();
        let junk = RawQuantity::Text("lots".into());

        let err = f.service.inbound("P999", "L999", &junk).unwrap_err();
        assert!(matches!(err, AppError::NotFound(Entity::Product, _)));

        let err = f.service.inbound(&f.product_id, "L999", &junk).unwrap_err();
        assert!(matches!(err, AppError::NotFound(Entity::Location, _)));

        let err = f.service.inbound(&f.product_id, &f.location_id, &junk).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        assert!(f.service.transactions().is_empty());
        assert_eq!(f.store.save_count(), 0);
    }

    #[test]
    fn stock_count_can_create_a_row_and_log_zero_difference() {
        let f = fixture();
        let (p, l) = (f.product_id.as_str(), f.location_id.as_str());

        let report = f.service.stock_count(p, l, &RawQuantity::Text("0".into())).unwrap();
        assert_eq!(report.receipt.delta, 0);
        assert_eq!(f.service.transactions().len(), 1);

        let zero = StockQuery {
            text: None,
            filter: StockFilter::ZeroStock,
        };
        assert_eq!(f.service.search(&zero).len(), 1);
        // Now referenced, so the product cannot go away.
        assert!(f.repo.write(|s| s.delete_product(p)).is_err());
    }

    #[test]
    fn unknown_pair_reads_as_zero() {
        let f = fixture();
        assert_eq!(f.service.stock_level("nope", "none"), 0);
    }
}
