//! Error types for the FAQ Bot.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, FAQ data, LLM and search failures.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the FAQ Bot.
///
/// Remote failures are returned as values and turned into user-facing text by
/// the chat layer; nothing in the answer path panics.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The FAQ data file does not exist
    #[error("FAQ file '{}' not found.", .0.display())]
    FaqNotFound(PathBuf),

    /// FAQ data errors other than a missing file
    #[error("FAQ error: {0}")]
    Faq(String),

    /// LLM provider errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Web search provider errors
    #[error("Search error: {0}")]
    Search(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
