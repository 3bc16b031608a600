// src/handlers/dashboard.rs

use axum::{Json, extract::State};

use crate::{
    config::AppState,
    models::dashboard::{DashboardSummary, HealthStatus},
};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses((status = 200, description = "Catalog size, stock total and today's movements", body = DashboardSummary))
)]
pub async fn get_summary(State(app_state): State<AppState>) -> Json<DashboardSummary> {
    Json(app_state.dashboard_service.get_summary())
}

// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Dashboard",
    responses((status = 200, description = "Service is up; `durable` tells whether storage is current", body = HealthStatus))
)]
pub async fn health(State(app_state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        durable: app_state.dashboard_service.is_durable(),
    })
}
