// src/db/persistence.rs

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{
    inventory::{Product, StockEntry, Transaction},
    location::Location,
};

/// The four datasets, exactly as they are read and written as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub products: BTreeMap<String, Product>,
    pub locations: BTreeMap<String, Location>,
    pub stocks: Vec<StockEntry>,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed {dataset} data: {source}")]
    Malformed {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid stock key {0:?}")]
    InvalidStockKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage behind the inventory.
///
/// `load` is called once at startup; `save` after every successful mutation
/// and once more at shutdown. Both move all four datasets at once.
pub trait Persistence: Send + Sync {
    /// Missing datasets load as empty. Any other failure is an error.
    fn load(&self) -> Result<Snapshot, PersistenceError>;

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;
}
