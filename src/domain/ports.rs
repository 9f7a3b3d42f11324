use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// One outbound GET. Transport-level failures (DNS, refused connection,
/// timeout) are errors; application-level non-2xx statuses are returned to
/// the caller, which decides how to react.
#[async_trait]
pub trait UpstreamFetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<(Vec<u8>, StatusCode)>;
}

pub trait ConfigProvider: Send + Sync {
    fn upstream_base(&self) -> &str;
    fn port(&self) -> u16;
    fn concurrent_requests(&self) -> usize;
    fn request_timeout(&self) -> Duration;
}
