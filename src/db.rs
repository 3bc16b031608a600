pub mod defaults;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod json_store;
pub use json_store::JsonFileStore;
pub mod memory_store;
pub use memory_store::MemoryStore;
pub mod persistence;
pub use persistence::{Persistence, PersistenceError, Snapshot};
