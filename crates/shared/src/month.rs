//! Sortable year-month keys and their display labels
//!
//! Key derivation and label formatting are explicit pure functions so the
//! grouping key can never drift with the environment's locale or timezone.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A calendar year-month, ordered chronologically.
///
/// Displays as zero-padded `YYYY-MM`, the internal grouping key format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Human-readable label, e.g. "March, 2024"
    pub fn label(&self) -> String {
        // month is 1..=12 by construction (from_date or validated FromStr)
        let name = MONTH_NAMES[(self.month - 1) as usize];
        format!("{}, {}", name, self.year)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error parsing a `YYYY-MM` key back into a [`MonthKey`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month key: {0}")]
pub struct ParseMonthKeyError(String);

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMonthKeyError(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(MonthKey { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_format_is_zero_padded() {
        let key = MonthKey::from_date(date(2024, 3, 9));
        assert_eq!(key.to_string(), "2024-03");
    }

    #[test]
    fn keys_order_chronologically() {
        let dec_2023 = MonthKey::from_date(date(2023, 12, 31));
        let jan_2024 = MonthKey::from_date(date(2024, 1, 1));
        let feb_2024 = MonthKey::from_date(date(2024, 2, 29));
        assert!(dec_2023 < jan_2024);
        assert!(jan_2024 < feb_2024);
    }

    #[test]
    fn label_is_month_name_and_year() {
        let key = MonthKey::from_date(date(2024, 3, 15));
        assert_eq!(key.label(), "March, 2024");
    }

    #[test]
    fn parse_roundtrip() {
        let key = MonthKey::from_date(date(2024, 1, 2));
        assert_eq!("2024-01".parse::<MonthKey>().unwrap(), key);
        assert_eq!(key.to_string().parse::<MonthKey>().unwrap(), key);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2024".parse::<MonthKey>().is_err());
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024-00".parse::<MonthKey>().is_err());
        assert!("march-2024".parse::<MonthKey>().is_err());
    }

    #[test]
    fn same_month_dates_share_a_key() {
        let a = MonthKey::from_date(date(2024, 1, 1));
        let b = MonthKey::from_date(date(2024, 1, 31));
        assert_eq!(a, b);
    }
}
