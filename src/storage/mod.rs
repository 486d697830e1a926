pub mod file_backend;

use crate::errors::TrackerError;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Keys of the flat persisted namespace.
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const CURRENCY: &str = "currency";
    pub const USER_BUDGET: &str = "userBudget";
    pub const CREDENTIALS: &str = "credentials";
}

/// Abstraction over flat key-value persistence backends.
///
/// Values are opaque strings: JSON for the structured keys, plain text for
/// the currency symbol and raw budget figure.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub use file_backend::FileStorage;
