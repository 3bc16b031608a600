// src/handlers/locations.rs

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
        location::Location,
        outcome::{EntityRef, Outcome},
    },
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LocationPayload {
    #[serde(alias = "desc")]
    #[validate(length(min = 1, message = "Description is required."))]
    pub description: String,
}

impl From<LocationPayload> for Location {
    fn from(p: LocationPayload) -> Self {
        Location {
            description: p.description,
        }
    }
}

// GET /api/locations
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = "Locations",
    responses((status = 200, description = "All locations keyed by id", body = BTreeMap<String, Location>))
)]
pub async fn list_locations(State(app_state): State<AppState>) -> Json<BTreeMap<String, Location>> {
    Json(app_state.catalog_service.list_locations())
}

// GET /api/locations/{id}
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "Location id")),
    responses(
        (status = 200, description = "The location", body = Location),
        (status = 404, description = "Unknown location")
    )
)]
pub async fn get_location(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let location = app_state
        .catalog_service
        .get_location(&id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(location)))
}

// POST /api/locations
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = "Locations",
    request_body = LocationPayload,
    responses(
        (status = 201, description = "Location created", body = Outcome<EntityRef>),
        (status = 400, description = "Missing description")
    )
)]
pub async fn create_location(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<LocationPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let service = app_state.catalog_service.clone();
    let id = run_blocking(move || service.create_location(payload.into()))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state
        .i18n_store
        .translate(&locale.0, "location.created", &[("id", id.clone())]);
    Ok((StatusCode::CREATED, Json(Outcome::success(message, EntityRef { id }))))
}

// PUT /api/locations/{id}
#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "Location id")),
    request_body = LocationPayload,
    responses(
        (status = 200, description = "Location updated", body = Outcome<EntityRef>),
        (status = 404, description = "Unknown location")
    )
)]
pub async fn update_location(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    AppJson(payload): AppJson<LocationPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let service = app_state.catalog_service.clone();
    let target = id.clone();
    run_blocking(move || service.update_location(&target, payload.into()))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state
        .i18n_store
        .translate(&locale.0, "location.updated", &[("id", id.clone())]);
    Ok((StatusCode::OK, Json(Outcome::success(message, EntityRef { id }))))
}

// DELETE /api/locations/{id}
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = "Locations",
    params(("id" = String, Path, description = "Location id")),
    responses(
        (status = 200, description = "Location deleted", body = Outcome<EntityRef>),
        (status = 404, description = "Unknown location"),
        (status = 409, description = "Location has stock rows or transactions")
    )
)]
pub async fn delete_location(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let service = app_state.catalog_service.clone();
    let target = id.clone();
    run_blocking(move || service.delete_location(&target))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state
        .i18n_store
        .translate(&locale.0, "location.deleted", &[("id", id.clone())]);
    Ok((StatusCode::OK, Json(Outcome::success(message, EntityRef { id }))))
}
