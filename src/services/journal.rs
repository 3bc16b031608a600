// src/services/journal.rs

use chrono::Local;
use uuid::Uuid;

use crate::models::inventory::{Transaction, TransactionType};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ID_LEN: usize = 8;

/// Append-only history of quantity-changing events, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn from_entries(entries: Vec<Transaction>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new transaction stamped with the current local time.
    /// Performs no validation; callers check ids and quantities first.
    pub fn record(
        &mut self,
        kind: TransactionType,
        product_id: &str,
        location_id: &str,
        quantity: i64,
    ) -> Transaction {
        let transaction = Transaction {
            id: self.fresh_id(),
            kind,
            product_id: product_id.to_string(),
            location_id: location_id.to_string(),
            quantity,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };
        self.entries.push(transaction.clone());
        transaction
    }

    fn fresh_id(&self) -> String {
        loop {
            let mut id = Uuid::new_v4().simple().to_string();
            id.truncate(ID_LEN);
            if !self.entries.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }

    pub fn references_product(&self, product_id: &str) -> bool {
        self.entries.iter().any(|t| t.references_product(product_id))
    }

    pub fn references_location(&self, location_id: &str) -> bool {
        self.entries.iter().any(|t| t.references_location(location_id))
    }

    /// Transactions of `kind` whose timestamp falls on `day` (`YYYY-MM-DD`).
    pub fn count_on_day(&self, kind: TransactionType, day: &str) -> usize {
        self.entries
            .iter()
            .filter(|t| t.kind == kind && t.timestamp.starts_with(day))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order_with_unique_short_ids() {
        let mut log = TransactionLog::default();
        let first = log.record(TransactionType::Inbound, "P001", "L001", 10);
        let second = log.record(TransactionType::StockCount, "P001", "L001", -2);

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0], first);
        assert_eq!(log.entries()[1], second);
        assert_eq!(first.id.len(), 8);
        assert_ne!(first.id, second.id);
        assert_eq!(second.quantity, -2);
        assert_eq!(first.timestamp.len(), "2024-01-01 10:00:00".len());
    }

    #[test]
    fn counts_by_day_and_kind() {
        let mut log = TransactionLog::default();
        log.record(TransactionType::Inbound, "P001", "L001", 1);
        log.record(TransactionType::Outbound, "P001", "L001", 1);
        log.record(TransactionType::Inbound, "P002", "L001", 1);
        let today = Local::now().format("%Y-%m-%d").to_string();

        assert_eq!(log.count_on_day(TransactionType::Inbound, &today), 2);
        assert_eq!(log.count_on_day(TransactionType::Outbound, &today), 1);
        assert_eq!(log.count_on_day(TransactionType::Inbound, "1999-01-01"), 0);
    }

    #[test]
    fn references_match_exact_ids() {
        let mut log = TransactionLog::default();
        log.record(TransactionType::Inbound, "P001", "L010", 1);
        assert!(log.references_product("P001"));
        assert!(!log.references_product("P00"));
        assert!(log.references_location("L010"));
        assert!(!log.references_location("L001"));
    }
}
