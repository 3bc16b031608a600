// src/db/json_store.rs

use std::{
    collections::BTreeMap,
    fs, io,
    path::PathBuf,
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::db::persistence::{Persistence, PersistenceError, Snapshot};
use crate::models::inventory::StockEntry;

const PRODUCTS_FILE: &str = "products.json";
const LOCATIONS_FILE: &str = "locations.json";
const STOCKS_FILE: &str = "stocks.json";
const TRANSACTIONS_FILE: &str = "transactions.json";

// stocks.json is written as a list of entries. Older files keyed each row by
// "productId,locationId"; those are still accepted on load.
#[derive(Deserialize)]
#[serde(untagged)]
enum StockFile {
    Entries(Vec<StockEntry>),
    Keyed(BTreeMap<String, i64>),
}

impl Default for StockFile {
    fn default() -> Self {
        StockFile::Entries(Vec::new())
    }
}

impl StockFile {
    fn into_entries(self) -> Result<Vec<StockEntry>, PersistenceError> {
        match self {
            StockFile::Entries(entries) => Ok(entries),
            StockFile::Keyed(map) => map
                .into_iter()
                .map(|(key, quantity)| {
                    let (product_id, location_id) = key
                        .split_once(',')
                        .ok_or_else(|| PersistenceError::InvalidStockKey(key.clone()))?;
                    Ok(StockEntry {
                        product_id: product_id.to_string(),
                        location_id: location_id.to_string(),
                        quantity,
                    })
                })
                .collect(),
        }
    }
}

/// Flat-file storage: one pretty-printed JSON file per dataset.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_dataset<T>(&self, file: &str, dataset: &'static str) -> Result<T, PersistenceError>
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match fs::read(self.dir.join(file)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Malformed { dataset, source })
    }

    fn write_dataset<T: Serialize>(&self, file: &str, dataset: &'static str, value: &T) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|source| PersistenceError::Malformed { dataset, source })?;
        // Write beside the target, then rename over it.
        let target = self.dir.join(file);
        let tmp = self.dir.join(format!("{file}.tmp"));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> Result<Snapshot, PersistenceError> {
        let products = self.read_dataset(PRODUCTS_FILE, "products")?;
        let locations = self.read_dataset(LOCATIONS_FILE, "locations")?;
        let stocks = self
            .read_dataset::<StockFile>(STOCKS_FILE, "stocks")?
            .into_entries()?;
        let transactions = self.read_dataset(TRANSACTIONS_FILE, "transactions")?;

        tracing::debug!(dir = %self.dir.display(), "inventory data loaded");
        Ok(Snapshot {
            products,
            locations,
            stocks,
            transactions,
        })
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        self.write_dataset(PRODUCTS_FILE, "products", &snapshot.products)?;
        self.write_dataset(LOCATIONS_FILE, "locations", &snapshot.locations)?;
        self.write_dataset(STOCKS_FILE, "stocks", &snapshot.stocks)?;
        self.write_dataset(TRANSACTIONS_FILE, "transactions", &snapshot.transactions)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::defaults::default_snapshot;

    #[test]
    fn missing_files_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("never-created"));
        assert_eq!(store.load().unwrap(), Snapshot::default());
    }

    #[test]
    fn saved_snapshot_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data"));
        let snapshot = default_snapshot();

        store.save(&snapshot).unwrap();

        assert!(dir.path().join("data").join(STOCKS_FILE).exists());
        assert!(!dir.path().join("data").join("stocks.json.tmp").exists());
        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test]
    fn legacy_stock_keys_are_split_into_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STOCKS_FILE), r#"{"P001,L001": 100, "P002,L003": 0}"#).unwrap();
        fs::write(dir.path().join(LOCATIONS_FILE), r#"{"L001": {"desc": "Floor 1"}}"#).unwrap();

        let snapshot = JsonFileStore::new(dir.path()).load().unwrap();

        assert_eq!(snapshot.locations["L001"].description, "Floor 1");
        assert_eq!(
            snapshot.stocks,
            vec![
                StockEntry {
                    product_id: "P001".into(),
                    location_id: "L001".into(),
                    quantity: 100
                },
                StockEntry {
                    product_id: "P002".into(),
                    location_id: "L003".into(),
                    quantity: 0
                },
            ]
        );
    }

    #[test]
    fn stock_key_without_delimiter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STOCKS_FILE), r#"{"P001L001": 1}"#).unwrap();

        let err = JsonFileStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidStockKey(k) if k == "P001L001"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PRODUCTS_FILE), "{ not json").unwrap();

        let err = JsonFileStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { dataset: "products", .. }));
    }
}
