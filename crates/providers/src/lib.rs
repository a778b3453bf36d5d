//! Generation service backends for Bursary.
//!
//! All backends implement the `bursary_core::Provider` trait. Only the
//! OpenAI chat-completions API is implemented today; the trait boundary
//! keeps the pipelines ignorant of which service answers them.

pub mod openai;

pub use openai::OpenAiProvider;

use bursary_config::AppConfig;

/// Build the default provider from configuration.
///
/// Never fails: a missing API key surfaces as a call-time error, not a
/// construction error, so the CLI can start and explain what is missing.
pub fn from_config(config: &AppConfig) -> OpenAiProvider {
    OpenAiProvider::new(config.api_key.clone())
}
