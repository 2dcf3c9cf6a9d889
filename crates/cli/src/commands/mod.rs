//! Command handlers for the FAQ Bot CLI.

pub mod chat;

pub use chat::ChatCommand;
