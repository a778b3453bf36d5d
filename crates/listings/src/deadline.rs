//! Deadline tag extraction.
//!
//! Listings are asked to carry their application deadline as a bracketed
//! ISO date, `[YYYY-MM-DD]`, on their first line. Models follow the format
//! imperfectly, so extraction is strict about what counts as a tag and
//! lenient about everything else: anything that does not shape up as a real
//! calendar date yields `None`, and the caller keeps the listing.

use chrono::NaiveDate;
use regex_lite::Regex;

/// Pattern for a bracketed ISO-format date tag.
const DEADLINE_TAG: &str = r"\[([0-9]{4}-[0-9]{2}-[0-9]{2})\]";

/// Extract the deadline from a listing's first line.
///
/// Scans the leftmost `[YYYY-MM-DD]` shaped tag and validates it as a real
/// calendar date. Returns `None` when no tag is present or the tag names an
/// impossible date such as `2025-02-30`.
pub fn extract_deadline(first_line: &str) -> Option<NaiveDate> {
    let tag = Regex::new(DEADLINE_TAG).ok()?;
    let captures = tag.captures(first_line)?;
    let raw = captures.get(1)?.as_str();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
