// src/services/catalog.rs

use std::collections::BTreeMap;

use crate::{
    common::error::{AppError, Entity},
    models::{inventory::Product, location::Location},
    services::id_generator::next_id,
};

pub const PRODUCT_PREFIX: &str = "P";
pub const LOCATION_PREFIX: &str = "L";

// ---
// Product catalog
// ---
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: BTreeMap<String, Product>,
}

impl ProductCatalog {
    pub fn from_map(products: BTreeMap<String, Product>) -> Self {
        Self { products }
    }

    pub fn as_map(&self) -> &BTreeMap<String, Product> {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // Linear scan; the catalog is small.
    fn barcode_taken(&self, barcode: &str, except: Option<&str>) -> bool {
        self.products
            .iter()
            .any(|(id, p)| Some(id.as_str()) != except && p.barcode == barcode)
    }

    /// Adds a product under the next free `P` id and returns that id.
    pub fn add(&mut self, product: Product) -> Result<String, AppError> {
        if self.barcode_taken(&product.barcode, None) {
            return Err(AppError::DuplicateBarcode(product.barcode));
        }
        let id = next_id(PRODUCT_PREFIX, self.products.keys());
        self.products.insert(id.clone(), product);
        Ok(id)
    }

    /// Replaces every field of an existing product. The barcode may stay the
    /// same but must not collide with another product.
    pub fn update(&mut self, id: &str, product: Product) -> Result<(), AppError> {
        if !self.contains(id) {
            return Err(AppError::NotFound(Entity::Product, id.to_string()));
        }
        if self.barcode_taken(&product.barcode, Some(id)) {
            return Err(AppError::DuplicateBarcode(product.barcode));
        }
        self.products.insert(id.to_string(), product);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Product, AppError> {
        self.products
            .remove(id)
            .ok_or_else(|| AppError::NotFound(Entity::Product, id.to_string()))
    }
}

// ---
// Locations
// ---
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationDirectory {
    locations: BTreeMap<String, Location>,
}

impl LocationDirectory {
    pub fn from_map(locations: BTreeMap<String, Location>) -> Self {
        Self { locations }
    }

    pub fn as_map(&self) -> &BTreeMap<String, Location> {
        &self.locations
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn add(&mut self, location: Location) -> String {
        let id = next_id(LOCATION_PREFIX, self.locations.keys());
        self.locations.insert(id.clone(), location);
        id
    }

    pub fn update(&mut self, id: &str, location: Location) -> Result<(), AppError> {
        match self.locations.get_mut(id) {
            Some(slot) => {
                *slot = location;
                Ok(())
            }
            None => Err(AppError::NotFound(Entity::Location, id.to_string())),
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<Location, AppError> {
        self.locations
            .remove(id)
            .ok_or_else(|| AppError::NotFound(Entity::Location, id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(barcode: &str) -> Product {
        Product {
            name: "Widget".into(),
            barcode: barcode.into(),
            unit: "ea".into(),
            category: "parts".into(),
        }
    }

    #[test]
    fn duplicate_barcode_is_rejected_and_catalog_unchanged() {
        let mut catalog = ProductCatalog::default();
        catalog.add(widget("999")).unwrap();
        let before = catalog.clone();

        let err = catalog.add(widget("999")).unwrap_err();

        assert!(matches!(err, AppError::DuplicateBarcode(b) if b == "999"));
        assert_eq!(catalog, before);
    }

    #[test]
    fn edit_may_keep_own_barcode_but_not_take_another() {
        let mut catalog = ProductCatalog::default();
        let first = catalog.add(widget("111")).unwrap();
        catalog.add(widget("222")).unwrap();

        let mut renamed = widget("111");
        renamed.name = "Sprocket".into();
        catalog.update(&first, renamed).unwrap();
        assert_eq!(catalog.get(&first).unwrap().name, "Sprocket");

        let err = catalog.update(&first, widget("222")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateBarcode(_)));
        assert_eq!(catalog.get(&first).unwrap().barcode, "111");
    }

    #[test]
    fn ids_continue_after_the_highest_even_with_gaps() {
        let mut catalog = ProductCatalog::default();
        assert_eq!(catalog.add(widget("1")).unwrap(), "P001");
        assert_eq!(catalog.add(widget("2")).unwrap(), "P002");
        assert_eq!(catalog.add(widget("3")).unwrap(), "P003");
        catalog.remove("P002").unwrap();
        assert_eq!(catalog.add(widget("4")).unwrap(), "P004");
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut catalog = ProductCatalog::default();
        assert!(matches!(
            catalog.update("P404", widget("1")),
            Err(AppError::NotFound(Entity::Product, _))
        ));
        let mut locations = LocationDirectory::default();
        assert!(matches!(
            locations.remove("L404"),
            Err(AppError::NotFound(Entity::Location, _))
        ));
    }

    #[test]
    fn locations_get_sequential_ids() {
        let mut locations = LocationDirectory::default();
        let a = locations.add(Location {
            description: "Dock".into(),
        });
        let b = locations.add(Location {
            description: "Mezzanine".into(),
        });
        assert_eq!((a.as_str(), b.as_str()), ("L001", "L002"));
    }
}
