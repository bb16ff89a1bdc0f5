//! HTTP client for the Star Wars API.
//!
//! Every call is a single GET against the configured base URL. There is no
//! retry and no pagination: the first page is decoded and returned as is.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::error::SwapiError;
use super::models::{ApiErrorBody, Character, Film, SearchPage};
use crate::core::config::SwapiConfig;

/// Searchable SWAPI collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    People,
    Planets,
    Films,
}

impl Collection {
    /// Collection path relative to the base URL, with trailing slash.
    pub fn path(self) -> &'static str {
        match self {
            Self::People => "/people/",
            Self::Planets => "/planets/",
            Self::Films => "/films/",
        }
    }
}

/// Client for the SWAPI REST endpoints.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted and
/// shares its connection pool.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl SwapiClient {
    /// Build a client from an immutable configuration value.
    pub fn new(config: SwapiConfig) -> Result<Self, SwapiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SwapiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search a collection by free-text term (`GET /<collection>/?search=<term>`).
    pub async fn search<T: DeserializeOwned>(
        &self,
        collection: Collection,
        term: &str,
    ) -> Result<SearchPage<T>, SwapiError> {
        self.get(collection.path(), &[("search", term)]).await
    }

    /// Fetch a single character (`GET /people/<id>/`).
    pub async fn character(&self, id: u32) -> Result<Character, SwapiError> {
        self.get(&format!("/people/{}/", id), &[]).await
    }

    /// Fetch the first page of the film collection (`GET /films/`).
    pub async fn films(&self) -> Result<SearchPage<Film>, SwapiError> {
        self.get(Collection::Films.path(), &[]).await
    }

    /// Issue a GET and decode the body into `T`.
    #[instrument(skip(self, query), fields(base = %self.base_url))]
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SwapiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        debug!(status = %status, "response received");

        let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ApiErrorBody>(&body)
                .ok()
                .map(|b| b.detail);
            warn!(status = status.as_u16(), ?detail, "remote returned an error status");
            return Err(SwapiError::status(status.as_u16(), detail));
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            SwapiError::malformed(e.to_string())
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> SwapiError {
        if e.is_timeout() {
            warn!("Request timed out after {}ms", self.timeout_ms);
            SwapiError::Timeout(self.timeout_ms)
        } else {
            warn!("Request failed: {}", e);
            SwapiError::transport(e.to_string())
        }
    }
}
