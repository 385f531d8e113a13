//! Normalized transaction types and the parse output aggregate.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// CREDIT/DEBIT marker as seen in the source statement, used only to
/// disambiguate sign when the amount does not already carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RawType {
    Credit,
    Debit,
}

/// Normalized output of statement parsing (provider-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Negative means debit/outflow; positive means credit/inflow. INR.
    pub amount: f64,
    pub description: String,
    /// One label from the closed taxonomy; never source-provided.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_type: Option<RawType>,
    /// Time-of-day as printed in the source, when the provider includes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Per-category spend aggregate (debits only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub amount: f64,
    pub count: usize,
    pub percentage: f64,
}

/// Output of a single parse call. Transactions are in ascending date order;
/// callers may re-sort descending for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub transactions: Vec<Transaction>,
    /// Sum of positive amounts.
    pub total_received: f64,
    /// Sum of absolute negative amounts.
    pub total_spent: f64,
    pub category_breakdown: BTreeMap<String, CategorySummary>,
    /// Non-fatal anomalies: defaulted dates, skipped pages, skipped candidates.
    pub parse_warnings: Vec<String>,
}

impl ParseResult {
    /// Well-formed empty result for statements where no grammar found anything.
    pub fn empty_with_warning(warning: impl Into<String>) -> Self {
        ParseResult {
            transactions: Vec::new(),
            total_received: 0.0,
            total_spent: 0.0,
            category_breakdown: BTreeMap::new(),
            parse_warnings: vec![warning.into()],
        }
    }

    /// Build the aggregate from an already filtered, deduped, sorted set.
    pub fn from_transactions(transactions: Vec<Transaction>, parse_warnings: Vec<String>) -> Self {
        let total_received: f64 = transactions
            .iter()
            .filter(|t| t.amount > 0.0)
            .map(|t| t.amount)
            .sum();
        let total_spent: f64 = transactions
            .iter()
            .filter(|t| t.amount < 0.0)
            .map(|t| t.amount.abs())
            .sum();

        let mut category_breakdown: BTreeMap<String, CategorySummary> = BTreeMap::new();
        for t in transactions.iter().filter(|t| t.amount < 0.0) {
            let entry = category_breakdown
                .entry(t.category.clone())
                .or_insert(CategorySummary {
                    amount: 0.0,
                    count: 0,
                    percentage: 0.0,
                });
            entry.amount += t.amount.abs();
            entry.count += 1;
        }
        if total_spent > 0.0 {
            for summary in category_breakdown.values_mut() {
                summary.percentage = summary.amount / total_spent * 100.0;
            }
        }

        ParseResult {
            transactions,
            total_received,
            total_spent,
            category_breakdown,
            parse_warnings,
        }
    }
}
