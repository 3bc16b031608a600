// src/common/error.rs

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;
use crate::models::outcome::Outcome;

/// Which kind of record an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    Location,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Product => f.write_str("product"),
            Entity::Location => f.write_str("location"),
        }
    }
}

/// Machine-readable error category carried in failed outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    DuplicateBarcode,
    InsufficientStock,
    ReferencedEntity,
    InvalidInput,
    Internal,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found: {1}")]
    NotFound(Entity, String),

    #[error("barcode already in use: {0}")]
    DuplicateBarcode(String),

    #[error("insufficient stock: available {available}, requested {requested}")]
    InsufficientStock {
        available: i64,
        requested: i64,
        unit: String,
    },

    #[error("{0} {1} is referenced by stock or transactions")]
    ReferencedEntity(Entity, String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("validation error")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(..) => ErrorKind::NotFound,
            AppError::DuplicateBarcode(_) => ErrorKind::DuplicateBarcode,
            AppError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            AppError::ReferencedEntity(..) => ErrorKind::ReferencedEntity,
            AppError::InvalidInput(_) | AppError::ValidationError(_) => ErrorKind::InvalidInput,
            AppError::InternalServerError(_) => ErrorKind::Internal,
        }
    }

    /// Turns the error into a localized, HTTP-ready `ApiError`.
    pub fn to_api_error(self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let kind = self.kind();
        let lang = locale.0.as_str();

        let (status, message) = match &self {
            AppError::NotFound(entity, id) => {
                let key = match entity {
                    Entity::Product => "error.product_not_found",
                    Entity::Location => "error.location_not_found",
                };
                (StatusCode::NOT_FOUND, i18n.translate(lang, key, &[("id", id.clone())]))
            }
            AppError::DuplicateBarcode(barcode) => (
                StatusCode::CONFLICT,
                i18n.translate(lang, "error.duplicate_barcode", &[("barcode", barcode.clone())]),
            ),
            AppError::InsufficientStock { available, unit, .. } => (
                StatusCode::CONFLICT,
                i18n.translate(
                    lang,
                    "error.insufficient_stock",
                    &[("available", available.to_string()), ("unit", unit.clone())],
                ),
            ),
            AppError::ReferencedEntity(entity, id) => {
                let key = match entity {
                    Entity::Product => "error.product_referenced",
                    Entity::Location => "error.location_referenced",
                };
                (StatusCode::CONFLICT, i18n.translate(lang, key, &[("id", id.clone())]))
            }
            AppError::InvalidInput(detail) => (
                StatusCode::BAD_REQUEST,
                i18n.translate(lang, "error.invalid_input", &[("detail", detail.clone())]),
            ),
            AppError::ValidationError(errors) => {
                let mut details: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, field_errors)| {
                        field_errors.iter().map(move |e| match &e.message {
                            Some(m) => m.to_string(),
                            None => format!("{field}: {}", e.code),
                        })
                    })
                    .collect();
                details.sort();
                (
                    StatusCode::BAD_REQUEST,
                    i18n.translate(lang, "error.validation", &[("detail", details.join(" "))]),
                )
            }
            // Logged with detail; the caller only gets a generic message.
            AppError::InternalServerError(e) => {
                tracing::error!("Internal server error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    i18n.translate(lang, "error.internal", &[]),
                )
            }
        };

        ApiError {
            status,
            message,
            kind,
        }
    }
}

/// Error already resolved to a status code and a localized message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub kind: ErrorKind,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(Outcome::failure(self.message, self.kind));
        (self.status, body).into_response()
    }
}
