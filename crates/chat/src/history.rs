//! Conversation history windowing and updates.
//!
//! History is a plain `Vec<Turn>` owned by the caller. The functions here
//! are pure: windowing borrows a suffix, appending returns a fresh vector.

use bursary_core::turn::Turn;

/// The most recent `max_turns` turns of `history`, oldest first.
///
/// Returns the whole slice when it is shorter than the window. A turn is
/// one message, so a window of 6 holds three user/assistant exchanges.
pub fn recent_window(history: &[Turn], max_turns: usize) -> &[Turn] {
    let start = history.len().saturating_sub(max_turns);
    &history[start..]
}

/// A copy of `history` with one completed exchange appended.
///
/// The user turn records what the user actually typed, not the wrapped
/// prompt sent to the service. The assistant turn records whatever text the
/// caller chose to keep (the finder stores the post-filter text).
pub fn appended(history: &[Turn], user_text: &str, assistant_text: &str) -> Vec<Turn> {
    let mut updated = Vec::with_capacity(history.len() + 2);
    updated.extend_from_slice(history);
    updated.push(Turn::user(user_text));
    updated.push(Turn::assistant(assistant_text));
    updated
}
