// src/services/catalog_service.rs

use std::collections::BTreeMap;

use crate::{
    common::error::AppError,
    db::InventoryRepository,
    models::{inventory::Product, location::Location},
};

/// Products and locations: create, read, update, guarded delete.
#[derive(Clone)]
pub struct CatalogService {
    inventory_repo: InventoryRepository,
}

impl CatalogService {
    pub fn new(inventory_repo: InventoryRepository) -> Self {
        Self { inventory_repo }
    }

    // --- PRODUCTS ---
    pub fn list_products(&self) -> BTreeMap<String, Product> {
        self.inventory_repo.read(|state| state.catalog.as_map().clone())
    }

    pub fn get_product(&self, id: &str) -> Result<Product, AppError> {
        self.inventory_repo.read(|state| state.product(id).cloned())
    }

    pub fn create_product(&self, product: Product) -> Result<String, AppError> {
        let id = self.inventory_repo.write(|state| state.catalog.add(product))?;
        tracing::info!(product_id = %id, "product created");
        Ok(id)
    }

    pub fn update_product(&self, id: &str, product: Product) -> Result<(), AppError> {
        self.inventory_repo
            .write(|state| state.catalog.update(id, product))?;
        tracing::info!(product_id = id, "product updated");
        Ok(())
    }

    pub fn delete_product(&self, id: &str) -> Result<(), AppError> {
        self.inventory_repo.write(|state| state.delete_product(id))?;
        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }

    // --- LOCATIONS ---
    pub fn list_locations(&self) -> BTreeMap<String, Location> {
        self.inventory_repo.read(|state| state.locations.as_map().clone())
    }

    pub fn get_location(&self, id: &str) -> Result<Location, AppError> {
        self.inventory_repo.read(|state| state.location(id).cloned())
    }

    pub fn create_location(&self, location: Location) -> Result<String, AppError> {
        let id = self
            .inventory_repo
            .write(|state| Ok(state.locations.add(location)))?;
        tracing::info!(location_id = %id, "location created");
        Ok(id)
    }

    pub fn update_location(&self, id: &str, location: Location) -> Result<(), AppError> {
        self.inventory_repo
            .write(|state| state.locations.update(id, location))?;
        tracing::info!(location_id = id, "location updated");
        Ok(())
    }

    pub fn delete_location(&self, id: &str) -> Result<(), AppError> {
        self.inventory_repo.write(|state| state.delete_location(id))?;
        tracing::info!(location_id = id, "location deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::MemoryStore;
    use crate::models::inventory::RawQuantity;
    use crate::services::{inventory_service::InventoryService, state::InventoryState};

    fn empty() -> (CatalogService, InventoryService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let repo = InventoryRepository::new(InventoryState::default(), store.clone());
        (CatalogService::new(repo.clone()), InventoryService::new(repo), store)
    }

    fn product(name: &str, barcode: &str) -> Product {
        Product {
            name: name.into(),
            barcode: barcode.into(),
            unit: "ea".into(),
            category: "parts".into(),
        }
    }

    #[test]
    fn every_change_is_flushed() {
        let (catalog, _, store) = empty();
        let pid = catalog.create_product(product("Widget", "999")).unwrap();
        let lid = catalog
            .create_location(Location {
                description: "Shelf1".into(),
            })
            .unwrap();
        catalog
            .update_location(
                &lid,
                Location {
                    description: "Shelf 1".into(),
                },
            )
            .unwrap();

        assert_eq!(store.save_count(), 3);
        let saved = store.last_saved().unwrap();
        assert_eq!(saved.products[&pid].name, "Widget");
        assert_eq!(saved.locations[&lid].description, "Shelf 1");
    }

    #[test]
    fn duplicate_barcode_leaves_catalog_and_storage_alone() {
        let (catalog, _, store) = empty();
        catalog.create_product(product("Widget", "999")).unwrap();
        let before = catalog.list_products();

        assert!(matches!(
            catalog.create_product(product("Other", "999")),
            Err(AppError::DuplicateBarcode(_))
        ));
        assert_eq!(catalog.list_products(), before);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn next_id_skips_deleted_gap() {
        let (catalog, _, _) = empty();
        for (i, code) in ["1", "2", "3"].into_iter().enumerate() {
            let id = catalog.create_product(product("P", code)).unwrap();
            assert_eq!(id, format!("P{:03}", i + 1));
        }
        catalog.delete_product("P002").unwrap();
        assert_eq!(catalog.create_product(product("P", "4")).unwrap(), "P004");
    }

    #[test]
    fn delete_guard_holds_after_stock_movement() {
        let (catalog, inventory, _) = empty();
        let pid = catalog.create_product(product("Widget", "999")).unwrap();
        let lid = catalog
            .create_location(Location {
                description: "Shelf1".into(),
            })
            .unwrap();
        inventory
            .inbound(&pid, &lid, &RawQuantity::Integer(4))
            .unwrap();

        assert!(matches!(
            catalog.delete_product(&pid),
            Err(AppError::ReferencedEntity(..))
        ));
        assert!(matches!(
            catalog.delete_location(&lid),
            Err(AppError::ReferencedEntity(..))
        ));
        assert!(catalog.get_product(&pid).is_ok());
        assert!(catalog.get_location(&lid).is_ok());
    }
}
