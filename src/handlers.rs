pub mod catalog;
pub mod dashboard;
pub mod inventory;
pub mod locations;

use crate::common::error::AppError;

// Writes flush to disk under the inventory lock; keep them off the async workers.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| anyhow::anyhow!("inventory write task failed: {}", e))?
}
