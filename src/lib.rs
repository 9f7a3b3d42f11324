pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::ServiceConfig;
pub use core::{aggregator::MovieAggregator, client::HttpUpstream};
pub use domain::model::{MovieRecord, MovieSummary, SpeciesRecord};
pub use server::{build_router, AppState};
pub use utils::error::{Result, ServiceError};
