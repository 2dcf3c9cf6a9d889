//! Search client abstraction.

use faqbot_core::AppResult;

/// Result of a successful search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Snippet of the first result
    Snippet(String),

    /// The provider answered with zero items
    NoResults,

    /// Credentials are missing; no request was made
    Disabled,
}

/// Trait for web search providers.
///
/// Implementations make at most one request per call and never rank or
/// aggregate results: only the first item counts.
#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Get the provider name (e.g., "google").
    fn provider_name(&self) -> &str;

    /// Search the web for `query`.
    async fn search(&self, query: &str) -> AppResult<SearchOutcome>;
}
