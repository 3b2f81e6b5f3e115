use serde::{Deserialize, Serialize};

/// A single row of the movie catalog.
///
/// The row's position in the catalog vector is its catalog index, which is
/// also its row/column index in the similarity matrix. Rows are loaded once
/// at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    /// TMDB id used for poster enrichment. Absent (or zero, which the
    /// artifact producer uses for "unknown") means no enrichment is possible.
    #[serde(default)]
    pub tmdb_id: Option<u64>,
    /// Free-text genre labels, possibly several names in one string.
    #[serde(default)]
    pub genre_names: String,
}

/// A ranked recommendation returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub poster: Option<String>,
}

/// Response envelope for `POST /recommend`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Response envelope for `GET /search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_deserializes_with_missing_optional_fields() {
        let movie: Movie = serde_json::from_str(r#"{"title": "Inception"}"#).unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.tmdb_id, None);
        assert_eq!(movie.genre_names, "");
    }

    #[test]
    fn recommendation_serializes_null_poster() {
        let rec = Recommendation {
            title: "Tenet".to_string(),
            poster: None,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["title"], "Tenet");
        assert!(json["poster"].is_null());
    }
}
