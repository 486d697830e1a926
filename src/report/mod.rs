//! Pure derived views over the transaction list: per-category totals for
//! chart display, plus income/expense filters and running totals.
//!
//! Nothing here is cached or persisted; the full render pass recomputes these
//! from scratch after every mutation.

use crate::ledger::{Category, Transaction};

/// Longest category label shown in a chart legend before truncation.
pub const MAX_LABEL_LENGTH: usize = 10;

/// Fixed chart palette; entries are assigned by position index, cycling.
pub const PALETTE: [&str; 6] = [
    "#43e97b", "#4f8cff", "#f9d423", "#fc466b", "#f7971e", "#a259c6",
];

const LEGEND_FONT_SIZE: u8 = 14;
const LEGEND_FONT_SIZE_COMPACT: u8 = 12;

/// One chart slice: a category's absolute total with its legend styling.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: f64,
    pub color: &'static str,
    pub legend_font_size: u8,
}

/// Groups transactions by category, summing absolute amounts. Output order is
/// the first-occurrence order of each category in the input.
pub fn category_totals<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<(Category, f64)> = Vec::new();
    for tx in transactions {
        match totals.iter_mut().find(|(cat, _)| *cat == tx.category) {
            Some((_, sum)) => *sum += tx.amount.abs(),
            None => totals.push((tx.category, tx.amount.abs())),
        }
    }
    totals
        .into_iter()
        .enumerate()
        .map(|(index, (category, amount))| legend_entry(index, category, amount))
        .collect()
}

fn legend_entry(index: usize, category: Category, amount: f64) -> CategoryTotal {
    let full = category.name();
    let truncated = full.chars().count() > MAX_LABEL_LENGTH;
    let name = if truncated {
        let mut short: String = full.chars().take(MAX_LABEL_LENGTH).collect();
        short.push('…');
        short
    } else {
        full.to_string()
    };
    CategoryTotal {
        name,
        amount,
        color: PALETTE[index % PALETTE.len()],
        legend_font_size: if truncated {
            LEGEND_FONT_SIZE_COMPACT
        } else {
            LEGEND_FONT_SIZE
        },
    }
}

/// Transactions with a strictly positive amount. Zero belongs to neither view.
pub fn income_transactions(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|tx| tx.is_income())
}

/// Transactions with a strictly negative amount.
pub fn expense_transactions(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|tx| tx.is_expense())
}

pub fn total_income(transactions: &[Transaction]) -> f64 {
    income_transactions(transactions)
        .map(|tx| tx.amount.abs())
        .sum()
}

pub fn total_expense(transactions: &[Transaction]) -> f64 {
    expense_transactions(transactions)
        .map(|tx| tx.amount.abs())
        .sum()
}
