//! Fund ledger proxy server
//!
//! Serves the compiled web UI as static files and proxies the two upstream
//! spreadsheet CSV exports so their URLs stay private and the browser never
//! has to fight cross-origin restrictions.

mod config;
mod routes;
mod upstream;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use config::Args;
use routes::AppState;
use upstream::HttpUpstream;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let state = AppState {
        upstream: Arc::new(HttpUpstream::new()),
        contributions_url: args.contributions_url,
        disbursements_url: args.disbursements_url,
    };
    let router = routes::create_router(state, &args.site_dir);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server is running on http://localhost:{}", args.port);

    axum::serve(listener, router)
        .await
        .context("server exited with an error")?;
    Ok(())
}

fn init_logger() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
