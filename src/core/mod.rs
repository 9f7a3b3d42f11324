pub mod aggregator;
pub mod client;
pub mod decode;

pub use crate::domain::model::{MovieRecord, MovieSummary, SpeciesRecord};
pub use crate::domain::ports::{ConfigProvider, UpstreamFetch};
pub use crate::utils::error::Result;
