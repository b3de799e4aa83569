//! Gemini-backed [`RankingAssistant`](rewind_core::RankingAssistant).
//!
//! [`GeminiClient`] sends one `generateContent` call per ranking request and
//! parses the model's JSON reply into a [`RankingResult`](rewind_core::RankingResult).

pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod types;

pub use client::{GeminiClient, DEFAULT_MODEL};
pub use error::GeminiError;
pub use parse::parse_ranking;
pub use prompt::{build_prompt, NO_STYLES_SELECTED};
