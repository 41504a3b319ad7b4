//! Pure view model for the monthly tables
//!
//! Rendering is split in two: this module builds plain display structures
//! from buckets and balances, and the Leptos layer in `fund-web` turns them
//! into DOM. Keeps the grouping/balance logic testable without a UI runtime.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::ledger::{MonthBalance, MonthBucket};
use crate::month::MonthKey;
use crate::record::{Category, TransactionRecord};

/// One table row, ready for display. The category tag is the only
/// non-string field; it drives row styling downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub name: String,
    pub date: String,
    pub phone: String,
    pub amount: String,
    pub items: String,
    pub category: Category,
}

/// One month's table plus its summary block, money preformatted to two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub month: MonthKey,
    pub label: String,
    pub rows: Vec<RowView>,
    pub contributions: String,
    pub disbursements: String,
    pub net: String,
    pub cumulative: String,
}

/// Two-decimal money formatting used by every summary figure.
pub fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}

fn row_view(record: &TransactionRecord) -> RowView {
    RowView {
        name: record.name.clone(),
        date: record.date_raw.clone(),
        phone: record.phone.clone(),
        // Raw text survives even when the amount failed numeric coercion
        amount: record.amount_raw.clone(),
        items: record.items.join(", "),
        category: record.category,
    }
}

/// Build the display sequence: one [`MonthView`] per month, latest month
/// first. Pure and idempotent; identical input yields identical output.
pub fn build_views(
    buckets: &BTreeMap<MonthKey, MonthBucket>,
    balances: &BTreeMap<MonthKey, MonthBalance>,
) -> Vec<MonthView> {
    buckets
        .iter()
        .rev()
        .filter_map(|(month, bucket)| {
            let balance = balances.get(month)?;
            Some(MonthView {
                month: *month,
                label: month.label(),
                rows: bucket.iter().map(row_view).collect(),
                contributions: format_amount(balance.contributions),
                disbursements: format_amount(balance.disbursements),
                net: format_amount(balance.net),
                cumulative: format_amount(balance.cumulative),
            })
        })
        .collect()
}
