mod datasets;
mod http;

pub use datasets::{FundData, fetch_fund_data};
