use crate::core::aggregator::MovieAggregator;
use crate::domain::model::MovieSummary;
use crate::utils::error::{Result, ServiceError};
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<MovieAggregator>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(get_movies))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Given a species id as query parameter, returns the list of movies that
/// species appears in.
async fn get_movies(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<MovieSummary>>> {
    let species_id = parse_species_param(query.as_deref())?;

    tracing::info!("querying upstream for species {}", species_id);
    let movies = state
        .aggregator
        .resolve_movies_for_species(&species_id)
        .await?;
    tracing::info!("resolved {} movies for species {}", movies.len(), species_id);

    Ok(Json(movies))
}

/// Accepts exactly one non-empty `species` value. Zero values and more than
/// one value (ambiguous input) are both client errors.
fn parse_species_param(query: Option<&str>) -> Result<String> {
    let query = query.unwrap_or_default();
    let mut values = url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "species")
        .map(|(_, value)| value.into_owned());

    let Some(species) = values.next() else {
        return Err(ServiceError::Validation {
            message: "url param 'species' is missing".to_string(),
        });
    };
    if values.next().is_some() {
        return Err(ServiceError::Validation {
            message: "url param 'species' was supplied more than once".to_string(),
        });
    }
    if species.trim().is_empty() {
        return Err(ServiceError::Validation {
            message: "url param 'species' is empty".to_string(),
        });
    }

    Ok(species)
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Validation { .. } => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            ServiceError::Transport(_)
            | ServiceError::Decode { .. }
            | ServiceError::InvalidConfigValue { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        if status.is_client_error() {
            tracing::warn!("{}", message);
        } else {
            tracing::error!("{}", message);
        }

        // Error bodies are JSON-encoded strings, not raw text.
        (status, Json(message)).into_response()
    }
}
