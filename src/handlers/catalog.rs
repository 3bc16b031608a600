// src/handlers/catalog.rs

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::run_blocking,
    middleware::{i18n::Locale, json::AppJson},
    models::{
        inventory::Product,
        outcome::{EntityRef, Outcome},
    },
};

// ---
// Payload: create / edit product
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    #[validate(length(min = 1, message = "Barcode is required."))]
    pub barcode: String,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub category: String,
}

impl From<ProductPayload> for Product {
    fn from(p: ProductPayload) -> Self {
        Product {
            name: p.name,
            barcode: p.barcode,
            unit: p.unit,
            category: p.category,
        }
    }
}

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Catalog",
    responses((status = 200, description = "Whole catalog keyed by product id", body = BTreeMap<String, Product>))
)]
pub async fn list_products(State(app_state): State<AppState>) -> Json<BTreeMap<String, Product>> {
    Json(app_state.catalog_service.list_products())
}

// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Unknown product")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = app_state
        .catalog_service
        .get_product(&id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(product)))
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Catalog",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Outcome<EntityRef>),
        (status = 400, description = "Missing name or barcode"),
        (status = 409, description = "Barcode already in use")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let service = app_state.catalog_service.clone();
    let id = run_blocking(move || service.create_product(payload.into()))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state
        .i18n_store
        .translate(&locale.0, "product.created", &[("id", id.clone())]);
    Ok((StatusCode::CREATED, Json(Outcome::success(message, EntityRef { id }))))
}

// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Outcome<EntityRef>),
        (status = 404, description = "Unknown product"),
        (status = 409, description = "Barcode used by another product")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let service = app_state.catalog_service.clone();
    let target = id.clone();
    run_blocking(move || service.update_product(&target, payload.into()))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state
        .i18n_store
        .translate(&locale.0, "product.updated", &[("id", id.clone())]);
    Ok((StatusCode::OK, Json(Outcome::success(message, EntityRef { id }))))
}

// DELETE /api/products/{id}
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = Outcome<EntityRef>),
        (status = 404, description = "Unknown product"),
        (status = 409, description = "Product has stock rows or transactions")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let service = app_state.catalog_service.clone();
    let target = id.clone();
    run_blocking(move || service.delete_product(&target))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state
        .i18n_store
        .translate(&locale.0, "product.deleted", &[("id", id.clone())]);
    Ok((StatusCode::OK, Json(Outcome::success(message, EntityRef { id }))))
}
