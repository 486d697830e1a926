//! Facade that wires one storage backend into the auth gate, settings, and
//! transaction store, in the cold-start order the presentation layer expects.

use std::sync::Arc;

use crate::auth::AuthGate;
use crate::budget::{self, BudgetStatus};
use crate::config::{Config, ConfigManager};
use crate::currency::Currency;
use crate::errors::TrackerError;
use crate::ledger::{Category, Transaction, TransactionStore};
use crate::report::{self, CategoryTotal};
use crate::storage::{FileStorage, StorageBackend};

/// One render pass worth of derived views, recomputed from scratch each call.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub income_chart: Vec<CategoryTotal>,
    pub expense_chart: Vec<CategoryTotal>,
    pub total_income: f64,
    pub total_expense: f64,
    pub budget_status: BudgetStatus,
}

pub struct Tracker {
    pub auth: AuthGate,
    pub store: TransactionStore,
    settings: ConfigManager,
    config: Config,
}

impl Tracker {
    /// Cold start: auth state first, then the stored transactions, then the
    /// currency/budget settings.
    pub fn open(storage: Arc<dyn StorageBackend>) -> Self {
        let auth = AuthGate::open(Arc::clone(&storage));
        let store = TransactionStore::open(Arc::clone(&storage));
        let settings = ConfigManager::new(storage);
        let config = settings.load();
        Self {
            auth,
            store,
            settings,
            config,
        }
    }

    /// Opens against the default on-disk store under the user's home.
    pub fn open_default() -> Result<Self, TrackerError> {
        let storage = FileStorage::new_default()?;
        Ok(Self::open(Arc::new(storage)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True until both a currency and a budget have been chosen.
    pub fn needs_setup(&self) -> bool {
        !self.config.is_complete()
    }

    pub fn set_currency(&mut self, currency: Currency) -> Result<(), TrackerError> {
        self.settings.set_currency(currency)?;
        self.config.currency = Some(currency);
        Ok(())
    }

    pub fn set_budget(&mut self, raw: &str) -> Result<(), TrackerError> {
        let cleaned = self.settings.set_budget(raw)?;
        self.config.budget = Some(cleaned);
        Ok(())
    }

    /// Adds a transaction; blocked until setup is complete.
    pub fn add_transaction(
        &mut self,
        desc: &str,
        raw_amount: &str,
        category: Category,
    ) -> Result<Transaction, TrackerError> {
        if self.needs_setup() {
            return Err(TrackerError::Validation(
                "select a currency and set a budget before adding transactions".into(),
            ));
        }
        self.store.add(desc, raw_amount, category)
    }

    pub fn update_transaction(
        &mut self,
        id: &str,
        desc: &str,
        raw_amount: &str,
        category: Category,
    ) -> Result<Transaction, TrackerError> {
        self.store.update(id, desc, raw_amount, category)
    }

    pub fn remove_transaction(&mut self, id: &str) -> Result<(), TrackerError> {
        self.store.remove(id)
    }

    /// Recomputes both chart views, both totals, and the budget status from
    /// the full transaction list. Nothing is cached; callers re-run this
    /// after every mutation.
    pub fn overview(&self) -> Overview {
        let transactions = self.store.transactions();
        let total_expense = report::total_expense(transactions);
        Overview {
            income_chart: report::category_totals(report::income_transactions(transactions)),
            expense_chart: report::category_totals(report::expense_transactions(transactions)),
            total_income: report::total_income(transactions),
            total_expense,
            budget_status: budget::evaluate(total_expense, self.config.budget_amount()),
        }
    }

    /// Share of the budget a single row represents, for per-row display.
    pub fn row_percent(&self, transaction: &Transaction) -> f64 {
        budget::percent_of_budget(transaction.amount, self.config.budget_amount())
    }
}
