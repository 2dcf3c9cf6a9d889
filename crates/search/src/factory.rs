//! Search provider factory.

use crate::client::SearchClient;
use crate::providers::GoogleSearchClient;
use faqbot_core::config::SearchSettings;
use std::sync::Arc;

/// Create the web search client.
///
/// Always succeeds: with incomplete credentials the client reports
/// `SearchOutcome::Disabled` for every query instead of calling out.
pub fn create_search_client(settings: &SearchSettings) -> Arc<dyn SearchClient> {
    let client = GoogleSearchClient::from_settings(settings);
    if client.is_enabled() {
        tracing::debug!("Web search enabled via {}", settings.endpoint);
    } else {
        tracing::warn!("Web search disabled: missing API key or search engine id");
    }
    Arc::new(client)
}
