//! Google Gemini backend for the prompt composer.

pub mod client;
pub mod config;
pub mod messages;

pub use client::GeminiClient;
pub use config::GeminiConfig;
