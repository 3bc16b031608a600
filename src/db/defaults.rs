// src/db/defaults.rs

use crate::db::persistence::Snapshot;
use crate::models::{
    inventory::{Product, StockEntry, Transaction, TransactionType},
    location::Location,
};

fn product(name: &str, barcode: &str, unit: &str, category: &str) -> Product {
    Product {
        name: name.to_string(),
        barcode: barcode.to_string(),
        unit: unit.to_string(),
        category: category.to_string(),
    }
}

fn stock(product_id: &str, location_id: &str, quantity: i64) -> StockEntry {
    StockEntry {
        product_id: product_id.to_string(),
        location_id: location_id.to_string(),
        quantity,
    }
}

/// Built-in dataset installed on first run or when stored data is unreadable.
pub fn default_snapshot() -> Snapshot {
    let products = [
        ("P001", product("Cola", "1234567890", "case", "Beverages")),
        ("P002", product("Apple", "1234567891", "kg", "Fruit")),
        ("P003", product("Bread", "1234567892", "each", "Food")),
    ]
    .into_iter()
    .map(|(id, p)| (id.to_string(), p))
    .collect();

    let locations = [
        ("L001", "Floor 1, Zone A"),
        ("L002", "Floor 1, Zone B"),
        ("L003", "Floor 2, Zone A"),
    ]
    .into_iter()
    .map(|(id, description)| {
        (
            id.to_string(),
            Location {
                description: description.to_string(),
            },
        )
    })
    .collect();

    Snapshot {
        products,
        locations,
        stocks: vec![
            stock("P001", "L001", 100),
            stock("P002", "L002", 50),
            stock("P003", "L003", 200),
        ],
        transactions: vec![Transaction {
            id: "T001".to_string(),
            kind: TransactionType::Inbound,
            product_id: "P001".to_string(),
            location_id: "L001".to_string(),
            quantity: 100,
            timestamp: "2024-01-01 10:00:00".to_string(),
        }],
    }
}
