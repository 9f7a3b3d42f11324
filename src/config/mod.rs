use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "ghibli-movies")]
#[command(about = "HTTP service returning the movies a given species appears in")]
pub struct ServiceConfig {
    /// TCP port the service listens on
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Base URL of the upstream REST API
    #[arg(long, env = "UPSTREAM_BASE", default_value = "https://ghibliapi.herokuapp.com")]
    pub upstream_base: String,

    /// Maximum number of film fetches in flight per request
    #[arg(long, default_value = "5")]
    pub concurrent_requests: usize,

    /// Per-call timeout for upstream requests, in seconds
    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for ServiceConfig {
    fn upstream_base(&self) -> &str {
        &self.upstream_base
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream_base", &self.upstream_base)?;
        validate_positive_number("port", self.port as usize, 1)?;
        validate_range("concurrent_requests", self.concurrent_requests, 1, 100)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        Ok(())
    }
}
