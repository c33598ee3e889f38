//! Finance summary over the filtered period ledger: income, expense,
//! profit and a per-category breakdown that fully partitions the expense
//! total. The unpaid-invoice figure is deliberately organization-wide and
//! independent of the active period filter; outstanding debt does not
//! expire with a reporting month.

use crate::models::ledger::{EntryType, LedgerEntry};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    /// Share of the total expense, 0..=100.
    pub percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FinanceSummary {
    pub income: f64,
    pub expense: f64,
    pub profit: f64,
    pub breakdown: Vec<CategoryTotal>,
    pub unpaid_total: f64,
    pub unpaid_count: i64,
}

/// Compute the summary for an already-filtered entry list. The unpaid pair
/// comes from its own org-wide query and is passed through untouched.
pub fn summarize(entries: &[LedgerEntry], unpaid_total: f64, unpaid_count: i64) -> FinanceSummary {
    let mut income = 0.0;
    let mut expense = 0.0;
    let mut per_category: HashMap<&str, f64> = HashMap::new();

    for e in entries {
        match e.entry_type {
            EntryType::Income => income += e.amount,
            EntryType::Expense => {
                expense += e.amount;
                *per_category.entry(e.category.as_str()).or_insert(0.0) += e.amount;
            }
        }
    }

    let mut breakdown: Vec<CategoryTotal> = per_category
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
            percent: if expense > 0.0 {
                amount / expense * 100.0
            } else {
                0.0
            },
        })
        .collect();

    // Largest first; name as tiebreak for stable output.
    breakdown.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    FinanceSummary {
        income,
        expense,
        profit: income - expense,
        breakdown,
        unpaid_total,
        unpaid_count,
    }
}
