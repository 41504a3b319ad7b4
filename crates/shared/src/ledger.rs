//! Month grouping and balance computation
//!
//! Balances are recomputed from scratch each cycle as a left-fold over the
//! chronologically sorted months; there is no accumulator that survives
//! between render cycles.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::month::MonthKey;
use crate::record::{Category, TransactionRecord};

/// Records of one calendar month, in source order.
pub type MonthBucket = Vec<TransactionRecord>;

/// Financial summary of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBalance {
    pub month: MonthKey,
    pub contributions: Decimal,
    pub disbursements: Decimal,
    /// contributions − disbursements
    pub net: Decimal,
    /// Running balance as of the end of this month, accumulated from the
    /// earliest month forward.
    pub cumulative: Decimal,
}

/// Partition records into per-month buckets keyed by their date's year-month.
///
/// Every record lands in exactly one bucket; bucket contents keep input
/// order. The BTreeMap keys iterate in ascending chronological order.
pub fn group_by_month(records: Vec<TransactionRecord>) -> BTreeMap<MonthKey, MonthBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();
    for record in records {
        buckets
            .entry(MonthKey::from_date(record.date))
            .or_default()
            .push(record);
    }
    buckets
}

fn sum_category(bucket: &[TransactionRecord], category: Category) -> Decimal {
    bucket
        .iter()
        .filter(|r| r.category == category)
        .map(TransactionRecord::amount_or_zero)
        .sum()
}

/// Compute per-month balances with the cumulative running total.
///
/// Single forward pass over ascending month keys, starting from zero before
/// the earliest month.
pub fn compute_balances(
    buckets: &BTreeMap<MonthKey, MonthBucket>,
) -> BTreeMap<MonthKey, MonthBalance> {
    let mut running = Decimal::ZERO;
    buckets
        .iter()
        .map(|(&month, bucket)| {
            let contributions = sum_category(bucket, Category::Contribution);
            let disbursements = sum_category(bucket, Category::Disbursement);
            let net = contributions - disbursements;
            running += net;
            (
                month,
                MonthBalance {
                    month,
                    contributions,
                    disbursements,
                    net,
                    cumulative: running,
                },
            )
        })
        .collect()
}
