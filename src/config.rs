// src/config.rs

use std::{env, path::PathBuf, sync::Arc};

use anyhow::bail;

use crate::{
    common::i18n::I18nStore,
    db::{InventoryRepository, JsonFileStore, MemoryStore, Persistence},
    services::{CatalogService, DashboardService, InventoryService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Json,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub storage: StorageKind,
}

impl Config {
    /// Reads `.env` (if present) and the `STOCKROOM_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("STOCKROOM_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let data_dir = env::var("STOCKROOM_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let storage = match env::var("STOCKROOM_STORAGE").as_deref() {
            Err(_) | Ok("json") => StorageKind::Json,
            Ok("memory") => StorageKind::Memory,
            Ok(other) => bail!("STOCKROOM_STORAGE must be 'json' or 'memory', got '{other}'"),
        };

        Ok(Self {
            bind_addr,
            data_dir: data_dir.into(),
            storage,
        })
    }
}

// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub inventory_repo: InventoryRepository,
    pub inventory_service: InventoryService,
    pub catalog_service: CatalogService,
    pub dashboard_service: DashboardService,
    pub i18n_store: Arc<I18nStore>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let persistence: Arc<dyn Persistence> = match config.storage {
            StorageKind::Json => {
                tracing::info!(dir = %config.data_dir.display(), "using JSON file storage");
                Arc::new(JsonFileStore::new(config.data_dir.clone()))
            }
            StorageKind::Memory => {
                tracing::warn!("using in-memory storage, nothing survives a restart");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::with_persistence(persistence))
    }

    /// Builds the dependency graph on top of any persistence port.
    pub fn with_persistence(persistence: Arc<dyn Persistence>) -> Self {
        let inventory_repo = InventoryRepository::open(persistence);

        Self {
            inventory_service: InventoryService::new(inventory_repo.clone()),
            catalog_service: CatalogService::new(inventory_repo.clone()),
            dashboard_service: DashboardService::new(inventory_repo.clone()),
            inventory_repo,
            i18n_store: Arc::new(I18nStore::new()),
        }
    }
}
