// src/models/outcome.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::common::error::ErrorKind;
use crate::models::inventory::Transaction;

/// Body returned by every write operation: a success flag, a human-readable
/// message and, on failure, the error kind.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Outcome<T> {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            error_kind: None,
            data: Some(data),
        }
    }
}

impl Outcome<()> {
    pub fn failure(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            ok: false,
            message: message.into(),
            error_kind: Some(kind),
            data: None,
        }
    }
}

// Result of an inbound, outbound or stock-count operation
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationReceipt {
    pub transaction: Transaction,
    pub quantity_before: i64,
    pub quantity_after: i64,
    pub delta: i64,
}

// Result of a catalog/location create or update
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    pub id: String,
}
