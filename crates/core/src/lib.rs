//! FAQ Bot Core Library
//!
//! This crate provides the foundational utilities shared by the FAQ Bot crates:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management and startup notices

pub mod config;
pub mod error;
pub mod logging;
pub mod notice;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use notice::{Notice, NoticeLevel};
