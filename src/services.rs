pub mod catalog;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod id_generator;
pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod journal;
pub mod ledger;
pub mod state;
