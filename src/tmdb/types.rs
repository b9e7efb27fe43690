//! Wire models for the TMDB REST API.
//!
//! Only the fields the browser consumes are modeled; everything else in
//! the response is ignored by serde. Records are immutable once parsed
//! and replaced wholesale on every fetch.

use serde::Deserialize;

/// One movie record as returned by the trending and search endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub vote_average: Option<f32>,
    /// Legacy rating field still present on some records. `vote_average`
    /// wins when both are set.
    #[serde(default)]
    pub rating: Option<f32>,
}

impl Movie {
    /// Effective rating: `vote_average` falling back to the legacy field.
    pub fn rating(&self) -> Option<f32> {
        self.vote_average.or(self.rating)
    }

    /// Rating as used for ordering. Records without any rating sort as 0.0.
    pub fn sort_rating(&self) -> f32 {
        self.rating().unwrap_or(0.0)
    }
}

/// Envelope shared by the trending and search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListResponse {
    pub results: Vec<Movie>,
}

/// Builds the CDN URL for a poster. `poster_path` comes from the API with
/// a leading slash; `image_base` must not end with one.
pub fn poster_url(image_base: &str, poster_path: &str) -> String {
    format!("{}{}", image_base, poster_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserializes_from_api_shape() {
        let json = r#"{
            "id": 414906,
            "title": "The Batman",
            "poster_path": "/74xTEgt7R36Fpooo50r9T25onhq.jpg",
            "overview": "In his second year of fighting crime...",
            "vote_average": 7.7,
            "release_date": "2022-03-01"
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 414906);
        assert_eq!(movie.title, "The Batman");
        assert_eq!(movie.rating(), Some(7.7));
    }

    #[test]
    fn test_missing_rating_fields_deserialize_to_none() {
        let json = r#"{"id": 1, "title": "Untitled", "poster_path": null}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.rating(), None);
        assert_eq!(movie.sort_rating(), 0.0);
        assert_eq!(movie.overview, "");
    }

    #[test]
    fn test_vote_average_wins_over_legacy_rating() {
        let json = r#"{"id": 1, "title": "T", "poster_path": null, "vote_average": 8.1, "rating": 3.0}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.rating(), Some(8.1));
    }

    #[test]
    fn test_legacy_rating_fallback() {
        let json = r#"{"id": 1, "title": "T", "poster_path": null, "rating": 6.5}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.rating(), Some(6.5));
    }

    #[test]
    fn test_poster_url_joins_base_and_path() {
        assert_eq!(
            poster_url(
                "https://image.tmdb.org/t/p/w500",
                "/74xTEgt7R36Fpooo50r9T25onhq.jpg"
            ),
            "https://image.tmdb.org/t/p/w500/74xTEgt7R36Fpooo50r9T25onhq.jpg"
        );
    }

    #[test]
    fn test_list_response_envelope() {
        let json = r#"{"page": 1, "results": [{"id": 2, "title": "Dune", "poster_path": null}], "total_pages": 500}"#;
        let response: MovieListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, "Dune");
    }
}
