//! Budget-threshold evaluation over total expenses.

/// Alert classification of total spending against the configured budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No usable budget figure; monitoring is inactive.
    Inactive,
    Normal,
    /// Soft alert carrying the rounded percentage of budget spent.
    Warning { percent: u32 },
    /// Spending has reached or passed the budget.
    Exceeded,
}

impl BudgetStatus {
    /// User-facing banner text, when one should be shown.
    pub fn message(&self) -> Option<String> {
        match self {
            BudgetStatus::Warning { percent } => {
                Some(format!("You have used {}% of your budget", percent))
            }
            BudgetStatus::Exceeded => Some("You have exceeded your budget!".into()),
            BudgetStatus::Inactive | BudgetStatus::Normal => None,
        }
    }
}

const WARNING_RATIO: f64 = 0.8;

/// Classifies `total_expense` against `budget`. Boundary ratios classify
/// upward: exactly 0.8 is a warning and exactly 1.0 is exceeded.
pub fn evaluate(total_expense: f64, budget: Option<f64>) -> BudgetStatus {
    let budget = match budget {
        Some(value) if value > 0.0 => value,
        _ => return BudgetStatus::Inactive,
    };
    let ratio = total_expense / budget;
    if ratio >= 1.0 {
        BudgetStatus::Exceeded
    } else if ratio >= WARNING_RATIO {
        BudgetStatus::Warning {
            percent: (ratio * 100.0).round() as u32,
        }
    } else {
        BudgetStatus::Normal
    }
}

/// Per-transaction share of the budget, rounded to one decimal place.
/// Reports 0 when no budget is configured.
pub fn percent_of_budget(amount: f64, budget: Option<f64>) -> f64 {
    match budget {
        Some(value) if value > 0.0 => {
            let percent = amount.abs() / value * 100.0;
            (percent * 10.0).round() / 10.0
        }
        _ => 0.0,
    }
}
