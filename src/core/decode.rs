use crate::core::{MovieRecord, Result, SpeciesRecord};
use crate::utils::error::ServiceError;

/// Decodes a species document. Syntactically invalid JSON is an error;
/// missing or unexpected fields fall back to their zero values.
pub fn decode_species(bytes: &[u8]) -> Result<SpeciesRecord> {
    serde_json::from_slice(bytes).map_err(|source| ServiceError::Decode {
        context: "species document",
        source,
    })
}

/// Decodes a movie document, with the same tolerance policy as
/// [`decode_species`].
pub fn decode_movie(bytes: &[u8]) -> Result<MovieRecord> {
    serde_json::from_slice(bytes).map_err(|source| ServiceError::Decode {
        context: "movie document",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_species_document() {
        let body = serde_json::json!({
            "id": "af3910a6-429f-4c74-9ad5-dfe1c4aa04f2",
            "name": "Human",
            "classification": "Mammal",
            "eye_colors": "Black, Blue, Brown",
            "hair_colors": "Black, Blonde, Brown",
            "url": "https://example.com/species/af3910a6",
            "people": ["https://example.com/people/1"],
            "films": [
                "https://example.com/films/a",
                "https://example.com/films/b"
            ]
        });

        let species = decode_species(body.to_string().as_bytes()).unwrap();
        assert_eq!(species.name, "Human");
        assert_eq!(
            species.films,
            vec![
                "https://example.com/films/a",
                "https://example.com/films/b"
            ]
        );
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let species = decode_species(br#"{"name":"Cat"}"#).unwrap();
        assert_eq!(species.name, "Cat");
        assert_eq!(species.id, "");
        assert_eq!(species.classification, "");
        assert!(species.films.is_empty());

        let movie = decode_movie(br#"{"title":"Porco Rosso"}"#).unwrap();
        assert_eq!(movie.title, "Porco Rosso");
        assert_eq!(movie.director, "");
        assert!(movie.people.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let movie = decode_movie(br#"{"title":"Ponyo","box_office":"unknown"}"#).unwrap();
        assert_eq!(movie.title, "Ponyo");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = decode_species(b"{not json").unwrap_err();
        assert!(matches!(err, ServiceError::Decode { context, .. } if context == "species document"));

        let err = decode_movie(b"").unwrap_err();
        assert!(matches!(err, ServiceError::Decode { context, .. } if context == "movie document"));
    }

    #[test]
    fn summary_projection_is_verbatim() {
        let body = serde_json::json!({
            "id": "2baf70d1-42bb-4437-b551-e5fed5a87abe",
            "title": "Castle in the Sky",
            "original_title": "天空の城ラピュタ",
            "original_title_romanised": "Tenkū no shiro Rapyuta",
            "description": "The orphan Sheeta inherited a mysterious crystal.",
            "director": "Hayao Miyazaki",
            "producer": "Isao Takahata",
            "release_date": "1986",
            "running_time": "124",
            "rt_score": "95"
        });

        let movie = decode_movie(body.to_string().as_bytes()).unwrap();
        let summary = crate::domain::model::MovieSummary::from(movie);

        assert_eq!(summary.id, "2baf70d1-42bb-4437-b551-e5fed5a87abe");
        assert_eq!(summary.title, "Castle in the Sky");
        assert_eq!(summary.director, "Hayao Miyazaki");
        assert_eq!(summary.producer, "Isao Takahata");
        assert_eq!(summary.release_date, "1986");
        assert_eq!(summary.rt_score, "95");
    }
}
