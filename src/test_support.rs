//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::config::DEFAULT_IMAGE_BASE_URL;
use crate::core::state::App;
use crate::tmdb::{Movie, MovieSource, TmdbError};

/// A canned-data source for tests that don't need real API calls.
#[derive(Default)]
pub struct StaticSource {
    pub trending: Vec<Movie>,
    pub search: Vec<Movie>,
}

#[async_trait]
impl MovieSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn trending(&self, _page: u32) -> Result<Vec<Movie>, TmdbError> {
        Ok(self.trending.clone())
    }

    async fn search(&self, _query: &str, _page: u32) -> Result<Vec<Movie>, TmdbError> {
        Ok(self.search.clone())
    }
}

/// Creates a test App backed by an empty StaticSource.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticSource::default()),
        DEFAULT_IMAGE_BASE_URL.to_string(),
    )
}

/// Builds a minimal movie record for assertions.
pub fn movie(id: u64, title: &str, vote_average: Option<f32>) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
        overview: format!("Overview of {title}."),
        vote_average,
        rating: None,
    }
}
