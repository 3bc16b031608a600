// src/docs.rs

use utoipa::OpenApi;

use crate::common::error::ErrorKind;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::health,

        // --- Catalog ---
        handlers::catalog::list_products,
        handlers::catalog::get_product,
        handlers::catalog::create_product,
        handlers::catalog::update_product,
        handlers::catalog::delete_product,

        // --- Locations ---
        handlers::locations::list_locations,
        handlers::locations::get_location,
        handlers::locations::create_location,
        handlers::locations::update_location,
        handlers::locations::delete_location,

        // --- Inventory ---
        handlers::inventory::inbound,
        handlers::inventory::outbound,
        handlers::inventory::stock_count,
        handlers::inventory::get_stock_level,
        handlers::inventory::search_inventory,
        handlers::inventory::list_transactions,
    ),
    components(
        schemas(
            ErrorKind,

            models::dashboard::DashboardSummary,
            models::dashboard::HealthStatus,

            models::inventory::Product,
            models::inventory::StockRow,
            models::inventory::StockFilter,
            models::inventory::TransactionType,
            models::inventory::Transaction,
            models::location::Location,
            models::outcome::OperationReceipt,
            models::outcome::EntityRef,

            // --- Payloads ---
            handlers::catalog::ProductPayload,
            handlers::locations::LocationPayload,
            handlers::inventory::MovementPayload,
            handlers::inventory::StockCountPayload,
            handlers::inventory::StockLevel,
        )
    ),
    tags(
        (name = "Dashboard", description = "Overview and health"),
        (name = "Catalog", description = "Products"),
        (name = "Locations", description = "Storage locations"),
        (name = "Inventory", description = "Stock movements, counts and queries")
    )
)]
pub struct ApiDoc;
