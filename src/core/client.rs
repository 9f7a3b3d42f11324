use crate::core::{Result, UpstreamFetch};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// reqwest-backed upstream client. One shared `Client` reuses connections
/// across requests but holds no per-request state.
pub struct HttpUpstream {
    client: Client,
}

impl HttpUpstream {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamFetch for HttpUpstream {
    async fn fetch(&self, url: &str) -> Result<(Vec<u8>, StatusCode)> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        tracing::debug!("{} responded {} ({} bytes)", url, status, body.len());
        Ok((body, status))
    }
}
