//! Persisted currency and budget settings, and the setup gate derived from
//! them: transaction entry is blocked until both are present.

use std::sync::Arc;

use tracing::warn;

use crate::currency::{self, Currency};
use crate::errors::TrackerError;
use crate::storage::{keys, StorageBackend};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub currency: Option<Currency>,
    /// Raw (unformatted) budget decimal as entered, kept as text.
    pub budget: Option<String>,
}

impl Config {
    /// Both settings must be chosen before transaction entry is permitted.
    pub fn is_complete(&self) -> bool {
        self.currency.is_some() && self.budget.is_some()
    }

    /// Parses the raw budget text for the monitor; `None` when unset or not
    /// a finite number.
    pub fn budget_amount(&self) -> Option<f64> {
        self.budget
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }
}

pub struct ConfigManager {
    storage: Arc<dyn StorageBackend>,
}

impl ConfigManager {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Reads both settings. Missing keys load as unset; an unreadable value or
    /// unknown currency symbol is tolerated with a warning rather than an
    /// error, so startup always succeeds.
    pub fn load(&self) -> Config {
        let currency = match self.storage.get(keys::CURRENCY) {
            Ok(Some(symbol)) => {
                let known = Currency::from_symbol(&symbol);
                if known.is_none() {
                    warn!("stored currency symbol `{symbol}` is unknown, treating as unset");
                }
                known
            }
            Ok(None) => None,
            Err(err) => {
                warn!("unable to read stored currency, treating as unset: {err}");
                None
            }
        };
        let budget = match self.storage.get(keys::USER_BUDGET) {
            Ok(value) => value.filter(|raw| !raw.is_empty()),
            Err(err) => {
                warn!("unable to read stored budget, treating as unset: {err}");
                None
            }
        };
        Config { currency, budget }
    }

    pub fn set_currency(&self, currency: Currency) -> Result<(), TrackerError> {
        self.storage.set(keys::CURRENCY, currency.symbol())
    }

    /// Cleans and persists the budget figure; returns the stored raw text.
    pub fn set_budget(&self, raw: &str) -> Result<String, TrackerError> {
        let cleaned = currency::to_raw(raw);
        if cleaned.is_empty() || cleaned.parse::<f64>().is_err() {
            return Err(TrackerError::Validation(format!(
                "budget `{}` is not numeric",
                raw
            )));
        }
        self.storage.set(keys::USER_BUDGET, &cleaned)?;
        Ok(cleaned)
    }
}
