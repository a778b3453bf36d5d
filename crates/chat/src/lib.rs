//! The two Bursary chat pipelines.
//!
//! Both pipelines follow the same shape:
//!
//! 1. **Window** the conversation history to the most recent turns
//! 2. **Assemble** the prompt: system instructions + window + wrapped user text
//! 3. **Call** the generation service through the `Provider` trait
//! 4. **Post-process** the reply (the finder screens out expired listings)
//! 5. **Append** the exchange to history and hand everything back
//!
//! Pipelines hold no conversation state. The caller owns the history and
//! passes it in on every call, which keeps both pipelines trivially
//! testable and lets a UI clear or persist conversations as it likes.

pub mod finder;
pub mod history;
pub mod prompt;
pub mod tutor;

pub use finder::{FinderPipeline, FinderReply};
pub use tutor::{TutorPipeline, TutorReply};

/// Default number of recent turns replayed into each request.
pub const DEFAULT_MAX_TURNS: usize = 6;
