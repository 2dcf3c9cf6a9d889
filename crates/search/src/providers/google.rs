//! Google Programmable Search (Custom Search JSON API) provider.
//!
//! API: `GET https://www.googleapis.com/customsearch/v1?key=…&cx=…&q=…`

use crate::client::{SearchClient, SearchOutcome};
use faqbot_core::config::SearchSettings;
use faqbot_core::{AppError, AppResult};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// API key and search engine id. Both are required to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

impl SearchCredentials {
    /// Pair up the two values; `None` if either is missing.
    pub fn from_parts(api_key: Option<String>, engine_id: Option<String>) -> Option<Self> {
        Some(Self {
            api_key: api_key?,
            engine_id: engine_id?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    snippet: Option<String>,
}

/// Custom Search client.
pub struct GoogleSearchClient {
    endpoint: String,
    credentials: Option<SearchCredentials>,
    client: reqwest::Client,
}

impl GoogleSearchClient {
    pub fn new(credentials: Option<SearchCredentials>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, credentials)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        credentials: Option<SearchCredentials>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from the configured search settings.
    pub fn from_settings(settings: &SearchSettings) -> Self {
        let credentials =
            SearchCredentials::from_parts(settings.api_key.clone(), settings.engine_id.clone());
        Self::with_endpoint(&settings.endpoint, credentials)
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    fn first_snippet(response: SearchResponse) -> AppResult<SearchOutcome> {
        match response.items.into_iter().next() {
            Some(item) => item
                .snippet
                .map(SearchOutcome::Snippet)
                .ok_or_else(|| AppError::Search("First search result has no snippet".to_string())),
            None => Ok(SearchOutcome::NoResults),
        }
    }
}

#[async_trait::async_trait]
impl SearchClient for GoogleSearchClient {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn search(&self, query: &str) -> AppResult<SearchOutcome> {
        let Some(ref credentials) = self.credentials else {
            tracing::debug!("Search credentials missing, skipping web search");
            return Ok(SearchOutcome::Disabled);
        };

        tracing::info!("Sending web search request");
        tracing::debug!("Query: {}", query);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", credentials.api_key.as_str()),
                ("cx", credentials.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Failed to send search request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Search(format!(
                "Custom Search API error ({}): {}",
                status, error_text
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("Failed to parse search response: {}", e)))?;

        tracing::debug!("Search returned {} items", parsed.items.len());
        Self::first_snippet(parsed)
    }
}
