//! The scholarship finder pipeline.
//!
//! Talks to a web-search model and screens its answer through the expiry
//! filter before anything reaches the user or the conversation history.
//! "Today" is captured once per call and used for the system instructions,
//! the prompt wrap, and the filter, so a request spanning midnight cannot
//! judge listings against a different date than it promised the model.

use std::sync::Arc;

use bursary_config::AppConfig;
use bursary_core::Result;
use bursary_core::provider::{Provider, ProviderRequest, Usage};
use bursary_core::turn::Turn;
use bursary_listings::{FilterResult, Listing, filter_expired};
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::{DEFAULT_MAX_TURNS, history, prompt};

/// One-call pipeline for the web-search scholarship finder.
///
/// Search-preview models reject sampling parameters, so requests go out
/// bare: model and messages only.
pub struct FinderPipeline {
    provider: Arc<dyn Provider>,
    model: String,
    max_turns: usize,
}

/// A completed finder exchange.
#[derive(Debug, Clone)]
pub struct FinderReply {
    /// The model's answer before filtering.
    pub raw_text: String,
    /// The displayable answer after expired listings were removed.
    pub text: String,
    /// The listings that were removed.
    pub dropped: Vec<Listing>,
    /// Token usage, if the service reported it.
    pub usage: Option<Usage>,
    /// The caller's history with this exchange appended.
    pub history: Vec<Turn>,
}

impl FinderReply {
    /// How many listings the filter removed.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

impl FinderPipeline {
    /// Create a pipeline with the stock settings (gpt-4o-mini-search-preview).
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            model: "gpt-4o-mini-search-preview".into(),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Create a pipeline configured from the app config.
    pub fn from_config(provider: Arc<dyn Provider>, config: &AppConfig) -> Self {
        Self::new(provider)
            .with_model(&config.finder.model)
            .with_max_turns(config.history.max_turns)
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the history window size.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Run one scholarship search using the current UTC date.
    pub async fn respond(&self, user_text: &str, chat_history: &[Turn]) -> Result<FinderReply> {
        self.respond_at(user_text, chat_history, Utc::now().date_naive())
            .await
    }

    /// Run one scholarship search judging deadlines against `today`.
    pub async fn respond_at(
        &self,
        user_text: &str,
        chat_history: &[Turn],
        today: NaiveDate,
    ) -> Result<FinderReply> {
        let window = history::recent_window(chat_history, self.max_turns);

        let messages = prompt::assemble(
            &prompt::finder_instructions(today),
            window,
            &prompt::wrap_finder_prompt(user_text, today),
        );

        debug!(
            model = %self.model,
            window = window.len(),
            %today,
            "Dispatching finder request"
        );

        let request = ProviderRequest::bare(self.model.clone(), messages);
        let response = self.provider.complete(request).await?;
        let raw_text = response.text().to_string();

        let result: FilterResult = filter_expired(&raw_text, today);
        let text = result.display_text();

        info!(
            kept = result.kept.len(),
            dropped = result.dropped.len(),
            tokens = response.usage.map(|u| u.total_tokens).unwrap_or(0),
            "Finder reply ready"
        );

        Ok(FinderReply {
            raw_text,
            // The post-filter text goes into history so expired listings
            // never echo back into later requests.
            history: history::appended(chat_history, user_text, &text),
            text,
            dropped: result.dropped,
            usage: response.usage,
        })
    }
}
