// src/db/inventory_repo.rs

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    common::error::AppError,
    db::{
        defaults::default_snapshot,
        persistence::{Persistence, PersistenceError},
    },
    services::state::InventoryState,
};

struct Inner {
    // One lock around validate -> mutate -> flush.
    state: Mutex<InventoryState>,
    persistence: Arc<dyn Persistence>,
    durable: AtomicBool,
}

/// The in-memory inventory plus the port it is flushed to.
#[derive(Clone)]
pub struct InventoryRepository {
    inner: Arc<Inner>,
}

impl InventoryRepository {
    /// Wraps an already-built state without loading or seeding anything.
    pub fn new(state: InventoryState, persistence: Arc<dyn Persistence>) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                persistence,
                durable: AtomicBool::new(true),
            }),
        }
    }

    /// Loads the stored datasets. An unreadable store is replaced by the
    /// default dataset; an empty catalog gets the defaults installed and
    /// written back.
    pub fn open(persistence: Arc<dyn Persistence>) -> Self {
        let snapshot = match persistence.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load inventory data, using defaults");
                default_snapshot()
            }
        };

        let repo = Self::new(InventoryState::from_snapshot(snapshot), persistence);
        {
            let mut state = repo.lock();
            if state.catalog.is_empty() {
                tracing::info!("catalog is empty, installing default dataset");
                *state = InventoryState::from_snapshot(default_snapshot());
                repo.flush_locked(&state);
            }
            tracing::info!(
                products = state.catalog.len(),
                locations = state.locations.len(),
                stock_rows = state.ledger.len(),
                transactions = state.journal.len(),
                "inventory ready"
            );
        }
        repo
    }

    fn lock(&self) -> MutexGuard<'_, InventoryState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn read<T>(&self, f: impl FnOnce(&InventoryState) -> T) -> T {
        f(&self.lock())
    }

    /// Runs a mutation under the lock and flushes all datasets if it
    /// succeeds. Errors returned by `f` must leave the state untouched.
    pub fn write<T>(&self, f: impl FnOnce(&mut InventoryState) -> Result<T, AppError>) -> Result<T, AppError> {
        let mut state = self.lock();
        let out = f(&mut state)?;
        self.flush_locked(&state);
        Ok(out)
    }

    // A failed flush is logged and otherwise swallowed: the request that
    // caused it still succeeds and memory stays ahead of storage until the
    // next successful flush. `is_durable` reports the gap.
    fn flush_locked(&self, state: &InventoryState) {
        match self.inner.persistence.save(&state.to_snapshot()) {
            Ok(()) => {
                if !self.inner.durable.swap(true, Ordering::SeqCst) {
                    tracing::info!("inventory data written again after earlier failure");
                }
            }
            Err(e) => {
                self.inner.durable.store(false, Ordering::SeqCst);
                tracing::error!(error = %e, "failed to save inventory data");
            }
        }
    }

    /// Explicit flush, used at shutdown. Unlike the flush after a write,
    /// this one reports its failure.
    pub fn flush(&self) -> Result<(), PersistenceError> {
        let state = self.lock();
        let result = self.inner.persistence.save(&state.to_snapshot());
        self.inner.durable.store(result.is_ok(), Ordering::SeqCst);
        result
    }

    /// False while the last flush failed.
    pub fn is_durable(&self) -> bool {
        self.inner.durable.load(Ordering::SeqCst)
    }
}
