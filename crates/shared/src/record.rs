//! Transaction records and their origin category

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Origin dataset of a record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Contribution,
    Disbursement,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Contribution => write!(f, "Contribution"),
            Category::Disbursement => write!(f, "Disbursement"),
        }
    }
}

/// One parsed row of the remote tabular data, tagged with its origin.
///
/// The raw `date_raw` and `amount_raw` strings are kept alongside the parsed
/// values: a row with an unparseable amount still shows its original text in
/// the rendered table while contributing zero to the sums.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub name: String,
    pub date: NaiveDate,
    pub date_raw: String,
    pub phone: String,
    pub amount: Option<Decimal>,
    pub amount_raw: String,
    pub items: Vec<String>,
    pub category: Category,
}

impl TransactionRecord {
    /// Amount used for sums; unparseable amounts count as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(amount: Option<Decimal>) -> TransactionRecord {
        TransactionRecord {
            name: "Rahim".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            date_raw: "2024-01-15".to_string(),
            phone: "01712-000000".to_string(),
            amount,
            amount_raw: "100".to_string(),
            items: vec![],
            category: Category::Contribution,
        }
    }

    #[test]
    fn unparseable_amount_counts_as_zero() {
        assert_eq!(record(None).amount_or_zero(), Decimal::ZERO);
        assert_eq!(record(Some(dec!(100))).amount_or_zero(), dec!(100));
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Contribution.to_string(), "Contribution");
        assert_eq!(Category::Disbursement.to_string(), "Disbursement");
    }
}
