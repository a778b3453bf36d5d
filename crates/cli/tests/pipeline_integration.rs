//! End-to-end integration tests for the Bursary chat pipelines.
//!
//! These exercise the full path from user input to reply: prompt assembly,
//! history windowing, the provider boundary, and the expiry filter, using a
//! scripted provider in place of the live service.

use std::sync::Arc;

use bursary_chat::{FinderPipeline, TutorPipeline};
use bursary_config::AppConfig;
use bursary_core::error::ProviderError;
use bursary_core::provider::{
    NO_CONTENT_SENTINEL, Provider, ProviderRequest, ProviderResponse, Usage,
};
use bursary_core::turn::{Role, Turn};
use bursary_listings::FALLBACK_NOTICE;
use chrono::NaiveDate;

// ── Scripted Provider ────────────────────────────────────────────────────

/// Hands out scripted responses in order and records every request it saw.
struct ScriptedProvider {
    responses: std::sync::Mutex<std::collections::VecDeque<ProviderResponse>>,
    requests: std::sync::Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    fn text(response: &str) -> Self {
        Self::texts(&[response])
    }

    fn texts(responses: &[&str]) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses.iter().map(|r| text_response(r)).collect()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn request(&self, index: usize) -> ProviderRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(resp) => Ok(resp),
            None => panic!("script ran dry after {} calls", self.calls()),
        }
    }
}

fn text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        content: text.to_string(),
        usage: Some(Usage {
            prompt_tokens: 12,
            completion_tokens: 7,
            total_tokens: 19,
        }),
        model: "scripted".into(),
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

const TODAY: &str = "2025-08-25";

// ── E2E: Tutor Conversation ──────────────────────────────────────────────

#[tokio::test]
async fn e2e_tutor_multi_turn_conversation() {
    let provider = Arc::new(ScriptedProvider::texts(&[
        "The derivative measures instantaneous rate of change.",
        "Yes — the chain rule handles composed functions.",
    ]));
    let pipeline = TutorPipeline::new(provider.clone());

    let first = pipeline
        .respond("What is a derivative?", &[], true)
        .await
        .expect("first turn should succeed");
    assert_eq!(first.history.len(), 2);

    let second = pipeline
        .respond("Does that work for nested functions?", &first.history, true)
        .await
        .expect("second turn should succeed");

    assert_eq!(second.history.len(), 4);
    assert_eq!(provider.calls(), 2);

    // The second request replays the first exchange inside the window.
    let request = provider.request(1);
    assert_eq!(request.messages.len(), 4); // system + 2 history + user
    assert_eq!(request.messages[1].content, "What is a derivative?");
    assert_eq!(
        request.messages[2].content,
        "The derivative measures instantaneous rate of change."
    );
    assert_eq!(request.messages[2].role, Role::Assistant);
}

#[tokio::test]
async fn e2e_tutor_window_caps_a_long_session() {
    let replies: Vec<String> = (0..5).map(|i| format!("answer {i}")).collect();
    let reply_refs: Vec<&str> = replies.iter().map(String::as_str).collect();
    let provider = Arc::new(ScriptedProvider::texts(&reply_refs));
    let pipeline = TutorPipeline::new(provider.clone());

    let mut history: Vec<Turn> = Vec::new();
    for i in 0..5 {
        let reply = pipeline
            .respond(&format!("question {i}"), &history, true)
            .await
            .expect("turn should succeed");
        history = reply.history;
    }

    // Full transcript grows without bound.
    assert_eq!(history.len(), 10);

    // The fifth request saw 8 prior turns but only the last 6 made the wire.
    let request = provider.request(4);
    assert_eq!(request.messages.len(), 8); // system + 6 windowed + user
    assert_eq!(request.messages[1].content, "question 1");
}

#[tokio::test]
async fn e2e_tutor_respects_config() {
    let provider = Arc::new(ScriptedProvider::text("ok"));
    let config: AppConfig = toml::from_str(
        r#"
        [tutor]
        model = "gpt-4o"
        temperature = 0.9

        [history]
        max_turns = 2
        "#,
    )
    .unwrap();

    let pipeline = TutorPipeline::from_config(provider.clone(), &config);
    let history = vec![
        Turn::user("old 1"),
        Turn::assistant("old 2"),
        Turn::user("old 3"),
        Turn::assistant("old 4"),
    ];
    pipeline.respond("now", &history, true).await.unwrap();

    let request = provider.request(0);
    assert_eq!(request.model, "gpt-4o");
    assert!((request.temperature.unwrap() - 0.9).abs() < 1e-6);
    // max_turns = 2 windows history down to the last exchange.
    assert_eq!(request.messages.len(), 4);
    assert_eq!(request.messages[1].content, "old 3");
}

// ── E2E: Finder Search and Filter ────────────────────────────────────────

#[tokio::test]
async fn e2e_finder_screens_expired_listings() {
    let raw = "Here is what I found.\n\n\
               • Future Leaders Grant — $5,000 — Deadline: \"January 15, 2026\" [2026-01-15]\n  \
               Link: https://example.org/full\n\n\
               • Last Year's Award — $2,000 — Deadline: \"June 1, 2024\" [2024-06-01]\n  \
               Link: https://example.org/stale";
    let provider = Arc::new(ScriptedProvider::text(raw));
    let pipeline = FinderPipeline::new(provider);

    let reply = pipeline
        .respond_at("STEM scholarships", &[], date(TODAY))
        .await
        .expect("search should succeed");

    assert!(reply.text.contains("Future Leaders Grant"));
    assert!(!reply.text.contains("Last Year's Award"));
    assert_eq!(reply.dropped_count(), 1);
    assert_eq!(reply.raw_text, raw);
}

#[tokio::test]
async fn e2e_finder_second_request_sees_only_clean_history() {
    let provider = Arc::new(ScriptedProvider::texts(&[
        "Open Grant [2026-01-15]\n\nStale Grant [2020-01-01]",
        "Nothing further [2026-02-02]",
    ]));
    let pipeline = FinderPipeline::new(provider.clone());

    let first = pipeline
        .respond_at("scholarships", &[], date(TODAY))
        .await
        .unwrap();
    pipeline
        .respond_at("any more?", &first.history, date(TODAY))
        .await
        .unwrap();

    let request = provider.request(1);
    // The assistant turn replayed into the second request is post-filter.
    assert_eq!(request.messages[2].content, "Open Grant [2026-01-15]");
    assert!(!request.messages[2].content.contains("Stale Grant"));
}

#[tokio::test]
async fn e2e_finder_all_expired_yields_fallback() {
    let provider = Arc::new(ScriptedProvider::text(
        "Grant A [2024-01-01]\n\nGrant B [2023-12-31]",
    ));
    let pipeline = FinderPipeline::new(provider);

    let reply = pipeline
        .respond_at("anything", &[], date(TODAY))
        .await
        .unwrap();

    assert_eq!(reply.text, FALLBACK_NOTICE);
    assert_eq!(reply.dropped_count(), 2);
}

#[tokio::test]
async fn e2e_finder_requests_are_bare() {
    let provider = Arc::new(ScriptedProvider::text("ok"));
    let pipeline = FinderPipeline::new(provider.clone());

    pipeline.respond_at("q", &[], date(TODAY)).await.unwrap();

    let request = provider.request(0);
    assert_eq!(request.model, "gpt-4o-mini-search-preview");
    assert!(request.temperature.is_none());
    assert!(request.max_tokens.is_none());
    assert!(request.messages[0].content.contains("Today is 2025-08-25."));
}

#[tokio::test]
async fn e2e_finder_empty_completion_is_not_an_error() {
    let empty = ProviderResponse {
        content: String::new(),
        usage: None,
        model: "scripted".into(),
    };
    let provider = Arc::new(ScriptedProvider {
        responses: std::sync::Mutex::new([empty].into()),
        requests: std::sync::Mutex::new(Vec::new()),
    });
    let pipeline = FinderPipeline::new(provider);

    let reply = pipeline.respond_at("q", &[], date(TODAY)).await.unwrap();
    assert_eq!(reply.text, NO_CONTENT_SENTINEL);
    assert!(reply.usage.is_none());
}

// ── E2E: Error Propagation ───────────────────────────────────────────────

#[tokio::test]
async fn e2e_service_errors_surface_after_one_attempt() {
    struct FailingProvider;

    #[async_trait::async_trait]
    impl Provider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            Err(ProviderError::AuthenticationFailed("bad key".into()))
        }
    }

    let pipeline = TutorPipeline::new(Arc::new(FailingProvider));
    let err = pipeline.respond("q", &[], true).await.unwrap_err();
    assert!(err.to_string().contains("Authentication failed"));
}
