// src/handlers/inventory.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    common::{error::ApiError, i18n::I18nStore},
    config::AppState,
    handlers::run_blocking,
    middleware::{i18n::Locale, json::AppJson},
    models::{
        inventory::{RawQuantity, StockFilter, StockQuery, StockRow, Transaction},
        outcome::{OperationReceipt, Outcome},
    },
    services::inventory_service::MovementReport,
};

// ---
// Payload: inbound / outbound
// ---
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovementPayload {
    pub product_id: String,
    pub location_id: String,
    /// Integer, or a string holding one.
    #[serde(default)]
    #[schema(value_type = i64, example = 10)]
    pub quantity: RawQuantity,
}

// ---
// Payload: stock count
// ---
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockCountPayload {
    pub product_id: String,
    pub location_id: String,
    #[serde(default)]
    #[schema(value_type = i64, example = 5)]
    pub actual_quantity: RawQuantity,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryParams {
    /// Matches product name, barcode or location description.
    pub query: Option<String>,
    /// `all`, `zero_stock`, `has_stock` or `low_stock`.
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockLevel {
    pub quantity: i64,
}

fn movement_message(key: &str, report: &MovementReport, locale: &Locale, i18n: &I18nStore) -> String {
    let receipt = &report.receipt;
    i18n.translate(
        &locale.0,
        key,
        &[
            ("product", report.product.name.clone()),
            ("location", report.location.description.clone()),
            ("quantity", receipt.delta.abs().to_string()),
            ("unit", report.product.unit.clone()),
            ("before", receipt.quantity_before.to_string()),
            ("after", receipt.quantity_after.to_string()),
        ],
    )
}

// POST /api/inbound
#[utoipa::path(
    post,
    path = "/api/inbound",
    tag = "Inventory",
    request_body = MovementPayload,
    responses(
        (status = 200, description = "Stock received", body = Outcome<OperationReceipt>),
        (status = 400, description = "Quantity is not a positive integer"),
        (status = 404, description = "Unknown product or location")
    )
)]
pub async fn inbound(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<MovementPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let service = app_state.inventory_service.clone();
    let report = run_blocking(move || {
        service.inbound(&payload.product_id, &payload.location_id, &payload.quantity)
    })
    .await
    .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = movement_message("inbound.done", &report, &locale, &app_state.i18n_store);
    Ok((StatusCode::OK, Json(Outcome::success(message, report.receipt))))
}

// POST /api/outbound
#[utoipa::path(
    post,
    path = "/api/outbound",
    tag = "Inventory",
    request_body = MovementPayload,
    responses(
        (status = 200, description = "Stock shipped", body = Outcome<OperationReceipt>),
        (status = 400, description = "Quantity is not a positive integer"),
        (status = 404, description = "Unknown product or location"),
        (status = 409, description = "Not enough stock at the location")
    )
)]
pub async fn outbound(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<MovementPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let service = app_state.inventory_service.clone();
    let report = run_blocking(move || {
        service.outbound(&payload.product_id, &payload.location_id, &payload.quantity)
    })
    .await
    .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = movement_message("outbound.done", &report, &locale, &app_state.i18n_store);
    Ok((StatusCode::OK, Json(Outcome::success(message, report.receipt))))
}

// POST /api/stocktaking
#[utoipa::path(
    post,
    path = "/api/stocktaking",
    tag = "Inventory",
    request_body = StockCountPayload,
    responses(
        (status = 200, description = "Counted quantity recorded", body = Outcome<OperationReceipt>),
        (status = 400, description = "Quantity is not a non-negative integer"),
        (status = 404, description = "Unknown product or location")
    )
)]
pub async fn stock_count(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<StockCountPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let service = app_state.inventory_service.clone();
    let report = run_blocking(move || {
        service.stock_count(&payload.product_id, &payload.location_id, &payload.actual_quantity)
    })
    .await
    .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let receipt = &report.receipt;
    let message = app_state.i18n_store.translate(
        &locale.0,
        "stockcount.done",
        &[
            ("product", report.product.name.clone()),
            ("location", report.location.description.clone()),
            ("system", receipt.quantity_before.to_string()),
            ("actual", receipt.quantity_after.to_string()),
            ("difference", format!("{:+}", receipt.delta)),
        ],
    );
    Ok((StatusCode::OK, Json(Outcome::success(message, report.receipt))))
}

// GET /api/stock/{product_id}/{location_id}
#[utoipa::path(
    get,
    path = "/api/stock/{product_id}/{location_id}",
    tag = "Inventory",
    params(
        ("product_id" = String, Path, description = "Product id"),
        ("location_id" = String, Path, description = "Location id")
    ),
    responses((status = 200, description = "Quantity on hand, 0 when there is no stock row", body = StockLevel))
)]
pub async fn get_stock_level(
    State(app_state): State<AppState>,
    Path((product_id, location_id)): Path<(String, String)>,
) -> Json<StockLevel> {
    let quantity = app_state
        .inventory_service
        .stock_level(&product_id, &location_id);
    Json(StockLevel { quantity })
}

// GET /api/inventory?query=&filter=
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "Inventory",
    params(InventoryParams),
    responses((status = 200, description = "Stock rows joined with product and location", body = [StockRow]))
)]
pub async fn search_inventory(
    State(app_state): State<AppState>,
    Query(params): Query<InventoryParams>,
) -> Json<Vec<StockRow>> {
    let query = StockQuery {
        text: params.query,
        filter: params
            .filter
            .as_deref()
            .map(StockFilter::parse)
            .unwrap_or(StockFilter::All),
    };
    Json(app_state.inventory_service.search(&query))
}

// GET /api/transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Inventory",
    responses((status = 200, description = "Transaction log in recording order", body = [Transaction]))
)]
pub async fn list_transactions(State(app_state): State<AppState>) -> Json<Vec<Transaction>> {
    Json(app_state.inventory_service.transactions())
}
