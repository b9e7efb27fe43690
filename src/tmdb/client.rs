//! HTTP client for the TMDB v3 API.
//!
//! Query construction is string assembly over two endpoints; the API key
//! travels as a query parameter, so full URLs are never logged.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{MovieSource, TmdbError};
use super::types::{Movie, MovieListResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// TMDB API client.
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    language: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Creates a new TMDB client.
    ///
    /// # Arguments
    /// * `api_key` - TMDB API key (v3 auth)
    /// * `base_url` - Optional custom base URL (defaults to TMDB's API)
    /// * `language` - Result language, e.g. "en-US"
    pub fn new(api_key: String, base_url: Option<String>, language: String) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            language,
            client: reqwest::Client::new(),
        }
    }

    fn trending_url(&self, page: u32) -> String {
        format!(
            "{}/trending/movie/week?api_key={}&page={}",
            self.base_url, self.api_key, page
        )
    }

    fn search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/search/movie?api_key={}&language={}&query={}&page={}",
            self.base_url,
            self.api_key,
            self.language,
            urlencoding::encode(query),
            page
        )
    }

    /// Sends a GET and deserializes the JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TmdbError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TmdbError::Network(e.to_string()))?;

        debug!("TMDB response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("TMDB API error: {} - {}", status, err_body);
            return Err(TmdbError::Api {
                status,
                message: err_body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn trending(&self, page: u32) -> Result<Vec<Movie>, TmdbError> {
        info!("TMDB request: trending/movie/week page={}", page);
        let response: MovieListResponse = self.fetch_json(&self.trending_url(page)).await?;
        debug!("Trending page {}: {} results", page, response.results.len());
        Ok(response.results)
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<Movie>, TmdbError> {
        info!(
            "TMDB request: search/movie page={} query_len={}",
            page,
            query.len()
        );
        let response: MovieListResponse = self.fetch_json(&self.search_url(query, page)).await?;
        debug!("Search page {}: {} results", page, response.results.len());
        Ok(response.results)
    }
}
