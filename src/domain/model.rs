use serde::{Deserialize, Serialize};

/// Species document as served by the upstream API.
///
/// The upstream contract is best-effort: every field defaults to its zero
/// value (empty string / empty list) when absent, and unknown fields are
/// ignored. Only `films` is consumed by the aggregator; the rest is decoded
/// for completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesRecord {
    pub id: String,
    pub name: String,
    pub classification: String,
    pub eye_colors: String,
    pub hair_colors: String,
    pub url: String,
    pub people: Vec<String>,
    /// Film-reference URLs, in upstream order. The response array mirrors
    /// this order exactly, duplicates included.
    pub films: Vec<String>,
}

/// Full movie document as served by the upstream API. Same zero-value
/// tolerance policy as [`SpeciesRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub original_title: String,
    pub original_title_romanised: String,
    pub description: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub running_time: String,
    pub rt_score: String,
    pub people: Vec<String>,
    pub species: Vec<String>,
    pub locations: Vec<String>,
    pub vehicles: Vec<String>,
    pub url: String,
}

/// Client-facing projection of a [`MovieRecord`]. Fields are copied verbatim
/// from the upstream document, never transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub rt_score: String,
}

impl From<MovieRecord> for MovieSummary {
    fn from(movie: MovieRecord) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            director: movie.director,
            producer: movie.producer,
            release_date: movie.release_date,
            rt_score: movie.rt_score,
        }
    }
}
