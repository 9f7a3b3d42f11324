use crate::core::decode::{decode_movie, decode_species};
use crate::core::{MovieSummary, Result, UpstreamFetch};
use crate::utils::error::ServiceError;
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::StatusCode;
use std::sync::Arc;

/// Two-stage fan-out: resolve the species document, then fetch every film it
/// references and project each into a [`MovieSummary`].
///
/// Film fetches run concurrently, bounded by `concurrent_requests`, but the
/// output order always matches the species document's film-reference order.
/// Any individual film failure fails the whole request; a partial movie list
/// with silent gaps is a worse contract than an explicit error.
pub struct MovieAggregator {
    upstream: Arc<dyn UpstreamFetch>,
    base_url: String,
    concurrent_requests: usize,
}

impl MovieAggregator {
    pub fn new(
        upstream: Arc<dyn UpstreamFetch>,
        base_url: impl Into<String>,
        concurrent_requests: usize,
    ) -> Self {
        Self {
            upstream,
            base_url: base_url.into(),
            concurrent_requests: concurrent_requests.max(1),
        }
    }

    pub async fn resolve_movies_for_species(&self, species_id: &str) -> Result<Vec<MovieSummary>> {
        let species_url = format!(
            "{}/species/{}",
            self.base_url.trim_end_matches('/'),
            species_id
        );

        let (body, status) = self.upstream.fetch(&species_url).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound {
                species: species_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ServiceError::UpstreamStatus {
                url: species_url,
                status,
            });
        }

        let species = decode_species(&body)?;
        tracing::debug!(
            "species '{}' references {} films",
            species.name,
            species.films.len()
        );

        self.resolve_films(&species.films).await
    }

    async fn resolve_films(&self, film_urls: &[String]) -> Result<Vec<MovieSummary>> {
        // `buffered` keeps input order no matter which fetch finishes first.
        // Collecting the (lazy) futures first sidesteps rustc's higher-ranked
        // lifetime inference bug when this stream is awaited in a handler.
        let fetches: Vec<_> = film_urls.iter().map(|url| self.fetch_film(url)).collect();
        stream::iter(fetches)
            .buffered(self.concurrent_requests)
            .try_collect()
            .await
    }

    async fn fetch_film(&self, url: &str) -> Result<MovieSummary> {
        let (body, status) = self.upstream.fetch(url).await?;
        if !status.is_success() {
            return Err(ServiceError::UpstreamStatus {
                url: url.to_string(),
                status,
            });
        }
        let movie = decode_movie(&body)?;
        Ok(MovieSummary::from(movie))
    }
}
