//! LLM integration crate for the FAQ Bot.
//!
//! This crate provides a provider-agnostic abstraction for chat-completion
//! services behind the [`LlmClient`] trait.
//!
//! # Providers
//! - **OpenAI**: any server speaking the OpenAI chat-completions protocol
//!
//! # Example
//! ```no_run
//! use faqbot_llm::{LlmClient, LlmRequest, providers::OpenAiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new(Some("sk-...".to_string()));
//! let request = LlmRequest::new("What are your hours?", "gpt-4o-mini")
//!     .with_system("You are a helpful FAQ chatbot.");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::OpenAiClient;
pub use types::{ChatMessage, ChatRole, ProviderType};
