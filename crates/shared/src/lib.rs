//! Domain core for the fund ledger: record normalization, month grouping,
//! balance computation, and the pure view model consumed by the web UI.
//!
//! Everything here is I/O-free and compiles to both native and wasm targets.

mod config;
pub mod ingest;
pub mod ledger;
pub mod month;
pub mod record;
pub mod view;

pub use config::{Config, CONFIG};
