//! Web search integration for the FAQ Bot.
//!
//! The search tier is the last resort of the fallback chain: it returns the
//! snippet of the first result for a query, or tells the caller why there
//! is none.

pub mod client;
pub mod factory;
pub mod providers;

pub use client::{SearchClient, SearchOutcome};
pub use factory::create_search_client;
pub use providers::GoogleSearchClient;
