use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use super::category::Category;

/// A signed monetary record; positive amounts are income, negative expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub desc: String,
    pub amount: f64,
    pub category: Category,
}

impl Transaction {
    pub fn new(desc: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            id: next_id(),
            desc: desc.into(),
            amount,
            category,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generates a time-derived identifier. The process-wide sequence suffix keeps
/// ids created within the same millisecond distinct.
fn next_id() -> String {
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Utc::now().timestamp_millis(), seq)
}
