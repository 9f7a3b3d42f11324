use clap::Parser;
use ghibli_movies::utils::{logger, validation::Validate};
use ghibli_movies::{AppState, HttpUpstream, MovieAggregator, ServiceConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting ghibli-movies service");
    if config.verbose {
        tracing::debug!("Service config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("invalid configuration: {}", e);
        std::process::exit(1);
    }

    let upstream = HttpUpstream::new(Duration::from_secs(config.request_timeout_secs))?;
    let aggregator = MovieAggregator::new(
        Arc::new(upstream),
        config.upstream_base.clone(),
        config.concurrent_requests,
    );

    let app = ghibli_movies::build_router(AppState {
        aggregator: Arc::new(aggregator),
    });

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    tracing::info!("movies endpoint: GET /movies?species=<id>");

    axum::serve(listener, app).await?;

    Ok(())
}
