//! # Bursary Listings
//!
//! Scholarship listing extraction and the deadline expiry filter.
//!
//! Web-search models periodically return scholarships whose application
//! windows have already closed. This crate post-processes raw model output:
//! it splits the text into listing blocks, reads the `[YYYY-MM-DD]` deadline
//! tag each listing is asked to carry, and drops listings whose deadline has
//! verifiably passed. Listings without a readable tag are kept, since a
//! formatting slip is not evidence of expiry.

pub mod deadline;
pub mod filter;
pub mod model;

pub use deadline::extract_deadline;
pub use filter::{FALLBACK_NOTICE, FilterResult, filter_expired};
pub use model::Listing;
