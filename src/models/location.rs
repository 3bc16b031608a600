// src/models/location.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---
// Location (a shelf, bin or zone of the warehouse)
// ---
// Keyed by id in the location map, like products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(alias = "desc")]
    pub description: String,
}
