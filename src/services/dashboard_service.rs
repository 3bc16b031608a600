// src/services/dashboard_service.rs

use chrono::Local;

use crate::{
    db::InventoryRepository,
    models::{dashboard::DashboardSummary, inventory::TransactionType},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: InventoryRepository,
}

impl DashboardService {
    pub fn new(repo: InventoryRepository) -> Self {
        Self { repo }
    }

    pub fn get_summary(&self) -> DashboardSummary {
        let today = Local::now().format("%Y-%m-%d").to_string();
        self.repo.read(|state| DashboardSummary {
            total_products: state.catalog.len(),
            total_locations: state.locations.len(),
            total_stock_quantity: state.ledger.total_quantity(),
            today_inbound: state.journal.count_on_day(TransactionType::Inbound, &today),
            today_outbound: state.journal.count_on_day(TransactionType::Outbound, &today),
        })
    }

    pub fn is_durable(&self) -> bool {
        self.repo.is_durable()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::MemoryStore;
    use crate::models::inventory::RawQuantity;
    use crate::services::inventory_service::InventoryService;

    #[test]
    fn summary_over_default_dataset() {
        let repo = InventoryRepository::open(Arc::new(MemoryStore::new()));
        let dashboard = DashboardService::new(repo.clone());

        let summary = dashboard.get_summary();
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.total_locations, 3);
        assert_eq!(summary.total_stock_quantity, 350);
        // The seeded transaction is dated 2024-01-01.
        assert_eq!(summary.today_inbound, 0);

        let inventory = InventoryService::new(repo);
        inventory
            .inbound("P002", "L002", &RawQuantity::Integer(5))
            .unwrap();
        inventory
            .outbound("P001", "L001", &RawQuantity::Integer(1))
            .unwrap();

        let summary = dashboard.get_summary();
        assert_eq!(summary.total_stock_quantity, 354);
        assert_eq!(summary.today_inbound, 1);
        assert_eq!(summary.today_outbound, 1);
    }
}
