//! The expiry filter.
//!
//! Raw model output is treated as a sequence of listing blocks separated by
//! blank lines. Each block is screened against its first-line deadline tag
//! and dropped only when the tag parses as a real date strictly before
//! today. Every ambiguous case, from a missing tag to an impossible date,
//! keeps the block. Relative block order survives filtering.

use chrono::NaiveDate;
use regex_lite::Regex;
use tracing::debug;

use crate::deadline::extract_deadline;
use crate::model::Listing;

/// Shown instead of an empty result when every listing was expired (or the
/// model returned nothing usable).
pub const FALLBACK_NOTICE: &str =
    "No still-open deadlines found. Try asking again or broadening your query.";

/// One or more blank-ish lines. A single line break stays inside its block.
const BLOCK_SEPARATOR: &str = r"(?:\r?\n\s*){2,}";

/// The outcome of screening one raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// Listings that survived, in their original order.
    pub kept: Vec<Listing>,
    /// Listings removed for a verifiably passed deadline, in original order.
    pub dropped: Vec<Listing>,
}

impl FilterResult {
    /// The text to show the user: surviving blocks rejoined with blank
    /// lines, or [`FALLBACK_NOTICE`] when nothing survived.
    pub fn display_text(&self) -> String {
        if self.kept.is_empty() {
            FALLBACK_NOTICE.to_string()
        } else {
            self.kept
                .iter()
                .map(|listing| listing.text.as_str())
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }

    /// How many listings were removed.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// Screen raw model output for expired listings.
///
/// Splits on blank lines, reads each block's first-line deadline tag, and
/// drops blocks dated strictly before `today`. Blocks without a readable
/// tag pass through untouched.
pub fn filter_expired(raw_text: &str, today: NaiveDate) -> FilterResult {
    let mut kept = Vec::new();
    let mut dropped = Vec::new();

    for block in split_blocks(raw_text) {
        let listing = Listing {
            text: block.to_string(),
            deadline: extract_deadline(first_line(block)),
        };

        if listing.is_expired(today) {
            debug!(
                first_line = %listing.first_line(),
                deadline = ?listing.deadline,
                "dropping expired listing"
            );
            dropped.push(listing);
        } else {
            kept.push(listing);
        }
    }

    FilterResult { kept, dropped }
}

/// Carve the raw text into trimmed, non-empty blocks.
fn split_blocks(raw_text: &str) -> Vec<&str> {
    let trimmed = raw_text.trim();
    match Regex::new(BLOCK_SEPARATOR) {
        Ok(separator) => separator
            .split(trimmed)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .collect(),
        // The pattern is a constant; if it somehow fails to compile, treat
        // the whole text as a single block rather than lose it.
        Err(_) if trimmed.is_empty() => Vec::new(),
        Err(_) => vec![trimmed],
    }
}

fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or("")
}
