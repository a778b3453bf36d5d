//! Conversation turn types.
//!
//! A [`Turn`] is the atomic unit of a chat exchange: who spoke and what they
//! said. A history is a plain ordered `Vec<Turn>` owned by the caller — the
//! pipelines receive it by reference and hand back an extended copy, so
//! nothing here carries identity, timestamps, or shared state.

use serde::{Deserialize, Serialize};

/// The speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The model's reply
    Assistant,
    /// Per-call instructions. Injected fresh by the prompt assembler on every
    /// request; never stored in a history.
    System,
}

impl Role {
    /// The lowercase wire name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single turn in a conversation.
///
/// Immutable once created; ordering within a history is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who spoke
    pub role: Role,

    /// What was said
    pub content: String,
}

impl Turn {
    /// Create a new user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Create a new system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_turn() {
        let turn = Turn::user("Find me a STEM scholarship");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.content, "Find me a STEM scholarship");
    }

    #[test]
    fn role_wire_names_are_lowercase() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
        assert_eq!(Role::System.as_str(), "system");
    }

    #[test]
    fn turn_serialization_roundtrip() {
        let turn = Turn::assistant("Here are three awards.");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains(r#""role":"assistant""#));

        let back: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, turn);
    }

    #[test]
    fn system_turn_parses_from_wire_format() {
        let turn: Turn =
            serde_json::from_str(r#"{"role":"system","content":"You are a tutor."}"#).unwrap();
        assert_eq!(turn.role, Role::System);
        assert_eq!(turn.content, "You are a tutor.");
    }
}
