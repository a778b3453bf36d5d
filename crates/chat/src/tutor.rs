//! The tutor + counselor pipeline.

use std::sync::Arc;

use bursary_config::AppConfig;
use bursary_core::Result;
use bursary_core::provider::{Provider, ProviderRequest, Usage};
use bursary_core::turn::Turn;
use tracing::{debug, info};

use crate::{DEFAULT_MAX_TURNS, history, prompt};

/// One-call pipeline for the general-purpose academic assistant.
pub struct TutorPipeline {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    max_turns: usize,
}

/// A completed tutor exchange.
#[derive(Debug, Clone)]
pub struct TutorReply {
    /// The assistant's displayable answer.
    pub text: String,
    /// Token usage, if the service reported it.
    pub usage: Option<Usage>,
    /// The caller's history with this exchange appended.
    pub history: Vec<Turn>,
    /// The model that served the request.
    pub model: String,
}

impl TutorPipeline {
    /// Create a pipeline with the stock settings (gpt-4o-mini at 0.3).
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            model: "gpt-4o-mini".into(),
            temperature: 0.3,
            max_tokens: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Create a pipeline configured from the app config.
    pub fn from_config(provider: Arc<dyn Provider>, config: &AppConfig) -> Self {
        let mut pipeline = Self::new(provider)
            .with_model(&config.tutor.model)
            .with_temperature(config.tutor.temperature)
            .with_max_turns(config.history.max_turns);
        pipeline.max_tokens = config.tutor.max_tokens;
        pipeline
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cap the completion length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Override the history window size.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Answer one user message.
    ///
    /// With `keep_history` false the request carries no prior turns, but the
    /// returned history still records the exchange so the caller can resume
    /// a remembered conversation later.
    pub async fn respond(
        &self,
        user_text: &str,
        chat_history: &[Turn],
        keep_history: bool,
    ) -> Result<TutorReply> {
        let window = if keep_history {
            history::recent_window(chat_history, self.max_turns)
        } else {
            &[]
        };

        let messages = prompt::assemble(
            prompt::tutor_instructions(),
            window,
            &prompt::wrap_tutor_prompt(user_text),
        );

        debug!(
            model = %self.model,
            window = window.len(),
            keep_history,
            "Dispatching tutor request"
        );

        let request = ProviderRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(self.temperature),
            max_tokens: self.max_tokens,
        };

        let response = self.provider.complete(request).await?;
        let text = response.text().to_string();

        info!(
            model = %response.model,
            tokens = response.usage.map(|u| u.total_tokens).unwrap_or(0),
            "Tutor reply ready"
        );

        Ok(TutorReply {
            history: history::appended(chat_history, user_text, &text),
            text,
            usage: response.usage,
            model: response.model,
        })
    }
}
