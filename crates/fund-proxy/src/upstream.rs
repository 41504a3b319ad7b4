//! Seam between the proxy routes and the outbound HTTP fetch, so handlers
//! can be exercised in tests without a live upstream.

use anyhow::{Result, bail};
use async_trait::async_trait;

#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetch one sheet's published CSV export as text.
    async fn fetch_csv(&self, url: &str) -> Result<String>;
}

/// Real upstream backed by a shared reqwest client.
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new() -> Self {
        HttpUpstream {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch_csv(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            bail!("upstream returned {}", response.status());
        }
        Ok(response.text().await?)
    }
}
