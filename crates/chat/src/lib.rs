//! FAQ chat session and fallback chain.
//!
//! Answers a question from the FAQ table when possible, otherwise from the
//! LLM, and falls back to a web search snippet when the LLM admits it does
//! not know.

pub mod faq;
pub mod messages;
pub mod orchestrator;
pub mod session;
pub mod transcript;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use faq::FaqTable;
pub use orchestrator::{is_uncertain, FallbackChain, FallbackStage, UNCERTAINTY_MARKER};
pub use session::ChatSession;
pub use transcript::{Speaker, Transcript};
pub use types::{Reply, ReplySource};
