//! The ordered transaction collection and its persistence round-trip.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::errors::TrackerError;
use crate::storage::{keys, StorageBackend};

use super::{Category, Transaction};

/// Owns the in-memory transaction list and mirrors every mutation to storage.
///
/// Each mutation serializes the entire collection, so persistence cost is
/// O(n) per single-record write.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    storage: Arc<dyn StorageBackend>,
}

impl TransactionStore {
    /// Loads the stored collection and takes ownership of it.
    pub fn open(storage: Arc<dyn StorageBackend>) -> Self {
        let transactions = Self::load_all(storage.as_ref());
        Self {
            transactions,
            storage,
        }
    }

    /// Reads the full collection from storage. A missing key yields an empty
    /// list; a malformed or unreadable value fails closed with a warning
    /// instead of surfacing an error.
    pub fn load_all(storage: &dyn StorageBackend) -> Vec<Transaction> {
        match storage.get(keys::TRANSACTIONS) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(transactions) => transactions,
                Err(err) => {
                    warn!("stored transactions are malformed, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("unable to read stored transactions, starting empty: {err}");
                Vec::new()
            }
        }
    }

    /// Insertion-ordered view of the collection; this is also display order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Validates and appends a new transaction, then persists the collection.
    pub fn add(
        &mut self,
        desc: &str,
        raw_amount: &str,
        category: Category,
    ) -> Result<Transaction, TrackerError> {
        let desc = desc.trim();
        if desc.is_empty() {
            return Err(TrackerError::Validation("description is required".into()));
        }
        let amount = parse_amount(raw_amount)?;
        let transaction = Transaction::new(desc, amount, category);
        let snapshot = transaction.clone();
        self.transactions.push(transaction);
        self.persist();
        Ok(snapshot)
    }

    /// Replaces the fields of an existing transaction in place, preserving its
    /// id and position, then persists the collection.
    pub fn update(
        &mut self,
        id: &str,
        desc: &str,
        raw_amount: &str,
        category: Category,
    ) -> Result<Transaction, TrackerError> {
        let index = self
            .transactions
            .iter()
            .position(|tx| tx.id == id)
            .ok_or_else(|| TrackerError::NotFound(format!("transaction `{}`", id)))?;
        let desc = desc.trim();
        if desc.is_empty() {
            return Err(TrackerError::Validation("description is required".into()));
        }
        let amount = parse_amount(raw_amount)?;
        let transaction = &mut self.transactions[index];
        transaction.desc = desc.to_string();
        transaction.amount = amount;
        transaction.category = category;
        let snapshot = transaction.clone();
        self.persist();
        Ok(snapshot)
    }

    /// Removes the matching transaction if present. An unknown id is a no-op.
    pub fn remove(&mut self, id: &str) -> Result<(), TrackerError> {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != id);
        if self.transactions.len() == before {
            debug!("remove skipped, no transaction with id {id}");
            return Ok(());
        }
        self.persist();
        Ok(())
    }

    /// Mirrors the in-memory collection to storage. The in-memory state is
    /// already updated when this runs; a failed write retries once and is then
    /// logged and swallowed, so callers never fail on persistence grounds.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.transactions) {
            Ok(json) => json,
            Err(err) => {
                error!("failed to serialize transactions: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(keys::TRANSACTIONS, &json) {
            warn!("transaction write failed, retrying once: {err}");
            if let Err(err) = self.storage.set(keys::TRANSACTIONS, &json) {
                error!("transaction write failed after retry, storage is behind memory: {err}");
            }
        }
    }
}

fn parse_amount(raw: &str) -> Result<f64, TrackerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation("amount is required".into()));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| TrackerError::Validation(format!("amount `{}` is not numeric", trimmed)))?;
    if !amount.is_finite() {
        return Err(TrackerError::Validation(format!(
            "amount `{}` is not a finite number",
            trimmed
        )));
    }
    Ok(amount)
}
