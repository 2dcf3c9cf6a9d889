//! LLM provider factory.
//!
//! Creates the completion client named by the configuration and injects its
//! endpoint and secret.

use crate::client::LlmClient;
use crate::providers::OpenAiClient;
use crate::types::ProviderType;
use faqbot_core::config::LlmSettings;
use faqbot_core::{AppError, AppResult};
use std::sync::Arc;

/// Create an LLM client from the configured settings.
///
/// A missing API key does not prevent construction: the request is still
/// attempted and the provider's rejection is reported when a question
/// reaches the LLM tier.
///
/// # Errors
/// Returns `AppError::Config` if the provider is unknown.
pub fn create_client(settings: &LlmSettings) -> AppResult<Arc<dyn LlmClient>> {
    let provider = ProviderType::parse(&settings.provider).ok_or_else(|| {
        AppError::Config(format!(
            "Unknown LLM provider: {}. Supported: openai",
            settings.provider
        ))
    })?;

    match provider {
        ProviderType::OpenAI => {
            if settings.api_key.is_none() {
                tracing::warn!(
                    "No API key in {}; completion requests will be unauthenticated",
                    settings.api_key_env
                );
            }
            tracing::debug!("Using OpenAI-compatible endpoint {}", settings.endpoint);
            let client = OpenAiClient::with_base_url(&settings.endpoint, settings.api_key.clone());
            Ok(Arc::new(client))
        }
    }
}
