//! Fetching both datasets and running the ledger pipeline

use shared::CONFIG;
use shared::ingest::{ParsedTable, parse_table};
use shared::ledger::{compute_balances, group_by_month};
use shared::record::Category;
use shared::view::{MonthView, build_views};

use super::http::get_text;

/// Everything the home page renders in one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundData {
    /// Per-month tables and summaries, latest month first
    pub months: Vec<MonthView>,
    /// Records skipped because their date could not be read
    pub dropped: usize,
}

/// Fetch both datasets through the proxy and build the monthly views.
///
/// The two fetches run concurrently with join semantics: if either one
/// fails, the whole cycle fails and nothing renders.
pub async fn fetch_fund_data() -> Option<FundData> {
    let (contributions, disbursements) = futures::join!(
        get_text(CONFIG.api.contributions),
        get_text(CONFIG.api.disbursements),
    );
    let (contributions, disbursements) = (contributions?, disbursements?);

    let contributions = parse_dataset(&contributions, Category::Contribution)?;
    let disbursements = parse_dataset(&disbursements, Category::Disbursement)?;
    let dropped = contributions.dropped + disbursements.dropped;

    let mut records = contributions.records;
    records.extend(disbursements.records);

    let buckets = group_by_month(records);
    let balances = compute_balances(&buckets);

    Some(FundData {
        months: build_views(&buckets, &balances),
        dropped,
    })
}

fn parse_dataset(csv_text: &str, category: Category) -> Option<ParsedTable> {
    match parse_table(csv_text, category) {
        Ok(table) => {
            if table.dropped > 0 {
                web_sys::console::warn_1(
                    &format!(
                        "{} {} record(s) skipped: unreadable date",
                        table.dropped, category
                    )
                    .into(),
                );
            }
            Some(table)
        }
        Err(e) => {
            web_sys::console::error_1(&format!("failed to parse {category} data: {e}").into());
            None
        }
    }
}
