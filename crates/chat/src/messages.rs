//! User-facing text for every outcome of the fallback chain.
//!
//! Clients return typed results; this module is where they become the
//! fixed strings the transcript shows.

use faqbot_core::{AppError, Notice};
use faqbot_search::SearchOutcome;

pub const LLM_APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";
pub const SEARCH_APOLOGY: &str = "Sorry, I encountered an error during search.";
pub const SEARCH_DISABLED: &str = "Search functionality is disabled.";
pub const NO_SEARCH_RESULTS: &str = "No relevant search results found.";
pub const WEB_FALLBACK_PREFIX: &str = "I am not sure, but here is what I found on the web: ";

/// Text shown for a search outcome.
pub fn search_text(outcome: &SearchOutcome) -> &str {
    match outcome {
        SearchOutcome::Snippet(snippet) => snippet,
        SearchOutcome::NoResults => NO_SEARCH_RESULTS,
        SearchOutcome::Disabled => SEARCH_DISABLED,
    }
}

/// Wrap a search result in the uncertain-answer template.
pub fn web_fallback(search_result: &str) -> String {
    format!("{}{}", WEB_FALLBACK_PREFIX, search_result)
}

pub fn llm_failure_notice(err: &AppError) -> Notice {
    Notice::error(format!("Error generating LLM response: {}", err))
}

pub fn search_failure_notice(err: &AppError) -> Notice {
    Notice::error(format!("Error during web search: {}", err))
}
