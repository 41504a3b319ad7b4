//! Turning raw tabular text into normalized transaction records
//!
//! The row-level parsing itself is delegated to the `csv` crate; this module
//! maps header names to fields, coerces dates and amounts, and tags each
//! record with its origin category.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::record::{Category, TransactionRecord};

/// Date formats accepted from the sheet export: ISO plus the US-style
/// renderings spreadsheets commonly emit.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// Result of parsing one dataset.
///
/// Records with unparseable dates cannot be placed in any month bucket, so
/// they are dropped here and counted; callers surface the count instead of
/// rendering a sentinel "unknown month" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub records: Vec<TransactionRecord>,
    pub dropped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read tabular data: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a date cell against the accepted formats.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Best-effort decimal coercion. Thousands separators are stripped before
/// parsing; anything else non-numeric yields `None`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Split a comma-separated items cell; blank cells yield an empty list.
pub fn split_items(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one dataset's CSV text (header row + data rows) into records tagged
/// with `category`.
///
/// Column lookup is header-driven and case-insensitive, so column order and
/// extra columns in the sheet do not matter. Missing cells become empty
/// strings; fully blank rows are ignored.
pub fn parse_table(csv_text: &str, category: Category) -> Result<ParsedTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let name_col = column("name");
    let date_col = column("date");
    let phone_col = column("phone");
    let amount_col = column("amount");
    let items_col = column("items");

    let field = |row: &StringRecord, col: Option<usize>| -> String {
        col.and_then(|i| row.get(i)).unwrap_or("").to_string()
    };

    let mut records = Vec::new();
    let mut dropped = 0;

    for result in reader.records() {
        let row = result?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let date_raw = field(&row, date_col);
        let Some(date) = parse_date(&date_raw) else {
            dropped += 1;
            continue;
        };

        let amount_raw = field(&row, amount_col);
        records.push(TransactionRecord {
            name: field(&row, name_col),
            date,
            date_raw,
            phone: field(&row, phone_col),
            amount: parse_amount(&amount_raw),
            amount_raw,
            items: split_items(&field(&row, items_col)),
            category,
        });
    }

    Ok(ParsedTable { records, dropped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const CONTRIBUTIONS: &str = "\
name,date,phone,amount,items
Rahim,2024-01-15,01712-000000,100,
Karim,01/20/2024,01913-111111,\"1,250.50\",\"rice, lentils\"
";

    #[test]
    fn parses_headered_rows_with_category_tag() {
        let table = parse_table(CONTRIBUTIONS, Category::Contribution).unwrap();
        assert_eq!(table.dropped, 0);
        assert_eq!(table.records.len(), 2);

        let rahim = &table.records[0];
        assert_eq!(rahim.name, "Rahim");
        assert_eq!(rahim.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(rahim.amount, Some(dec!(100)));
        assert_eq!(rahim.category, Category::Contribution);
        assert!(rahim.items.is_empty());

        let karim = &table.records[1];
        assert_eq!(karim.date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        assert_eq!(karim.amount, Some(dec!(1250.50)));
        assert_eq!(karim.items, vec!["rice".to_string(), "lentils".to_string()]);
    }

    #[test]
    fn header_lookup_is_case_insensitive_and_order_free() {
        let csv = "Phone,Amount,Name,Date\n01712,75,Salma,2024-03-01\n";
        let table = parse_table(csv, Category::Disbursement).unwrap();
        let rec = &table.records[0];
        assert_eq!(rec.name, "Salma");
        assert_eq!(rec.phone, "01712");
        assert_eq!(rec.amount, Some(dec!(75)));
        // No items column in this export
        assert!(rec.items.is_empty());
    }

    #[test]
    fn malformed_amount_is_kept_with_raw_text() {
        let csv = "name,date,phone,amount,items\nRahim,2024-01-15,01712,abc,\n";
        let table = parse_table(csv, Category::Contribution).unwrap();
        let rec = &table.records[0];
        assert_eq!(rec.amount, None);
        assert_eq!(rec.amount_raw, "abc");
        assert_eq!(rec.amount_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn malformed_date_is_dropped_and_counted() {
        let csv = "name,date,phone,amount,items\n\
                   Rahim,not-a-date,01712,100,\n\
                   Karim,2024-02-01,01913,50,\n";
        let table = parse_table(csv, Category::Contribution).unwrap();
        assert_eq!(table.dropped, 1);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].name, "Karim");
    }

    #[test]
    fn blank_rows_are_ignored_without_counting() {
        let csv = "name,date,phone,amount,items\n,,,,\nRahim,2024-01-15,01712,100,\n";
        let table = parse_table(csv, Category::Contribution).unwrap();
        assert_eq!(table.dropped, 0);
        assert_eq!(table.records.len(), 1);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let table = parse_table("", Category::Contribution).unwrap();
        assert!(table.records.is_empty());
        assert_eq!(table.dropped, 0);
    }

    #[test]
    fn amount_coercion_handles_separators_and_blanks() {
        assert_eq!(parse_amount("1,000"), Some(dec!(1000)));
        assert_eq!(parse_amount(" 40.25 "), Some(dec!(40.25)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }
}
