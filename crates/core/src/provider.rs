//! The generation-service boundary.
//!
//! Everything behind this trait is opaque to the pipelines: they hand over a
//! fully assembled message list and get back text plus optional usage
//! accounting. Streaming, retries, and tool use are out of scope for this
//! trait — one request, one response.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::turn::Turn;

/// Placeholder text substituted when the service returns an empty or
/// whitespace-only completion. An empty completion is a valid outcome, not a
/// failure, so downstream stages always receive displayable text.
pub const NO_CONTENT_SENTINEL: &str = "[No content returned]";

/// A single completion request.
///
/// `temperature` is optional because some models (the web-search variants in
/// particular) reject sampling parameters outright. `None` means the field is
/// omitted from the wire request entirely, not sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderRequest {
    pub model: String,
    pub messages: Vec<Turn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ProviderRequest {
    /// A request with no sampling parameters set.
    pub fn bare(model: impl Into<String>, messages: Vec<Turn>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Token accounting as reported by the service, when available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// A completed generation.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Raw completion text, exactly as returned. May be empty.
    pub content: String,
    /// Token usage, if the service reported it.
    pub usage: Option<Usage>,
    /// The model that actually served the request.
    pub model: String,
}

impl ProviderResponse {
    /// The displayable text of this response, trimmed. Empty or
    /// whitespace-only content becomes [`NO_CONTENT_SENTINEL`].
    pub fn text(&self) -> &str {
        let trimmed = self.content.trim();
        if trimmed.is_empty() {
            NO_CONTENT_SENTINEL
        } else {
            trimmed
        }
    }
}

/// A chat-completion backend.
///
/// Implementations must be cheap to construct and must not validate
/// credentials until [`complete`](Provider::complete) is called.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier for logging.
    fn name(&self) -> &str;

    /// Execute one completion request.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError>;
}
