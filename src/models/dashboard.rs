// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// Counters shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_locations: usize,
    pub total_stock_quantity: i64, // Sum over every ledger row
    pub today_inbound: usize,      // Inbound transactions stamped today
    pub today_outbound: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    // false while the last write to storage failed
    pub durable: bool,
}
