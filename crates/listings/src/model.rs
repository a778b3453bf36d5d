//! Listing block model.

use chrono::NaiveDate;
use serde::Serialize;

/// One scholarship listing as carved out of raw model output.
///
/// A listing is a run of non-blank lines. The deadline tag, when present, is
/// read from the first line only; tags further down describe other dates
/// (result announcements, document deadlines) and must not trigger removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// The block text, exactly as it appeared (inner line breaks intact).
    pub text: String,
    /// The parsed deadline, if the first line carried a valid tag.
    pub deadline: Option<NaiveDate>,
}

impl Listing {
    /// The first line of the block, used for tag extraction and logging.
    pub fn first_line(&self) -> &str {
        self.text.lines().next().unwrap_or("")
    }

    /// Whether this listing's deadline is strictly before `today`.
    ///
    /// Listings without a parsed deadline are never expired; ambiguity
    /// resolves toward keeping.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        match self.deadline {
            Some(deadline) => deadline < today,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn first_line_of_multiline_block() {
        let listing = Listing {
            text: "1. Acme Grant [2030-01-15]\n   Amount: $5,000".into(),
            deadline: Some(date("2030-01-15")),
        };
        assert_eq!(listing.first_line(), "1. Acme Grant [2030-01-15]");
    }

    #[test]
    fn expired_means_strictly_before_today() {
        let listing = Listing {
            text: "Grant [2025-06-01]".into(),
            deadline: Some(date("2025-06-01")),
        };
        assert!(listing.is_expired(date("2025-06-02")));
        assert!(!listing.is_expired(date("2025-06-01")));
        assert!(!listing.is_expired(date("2025-05-31")));
    }

    #[test]
    fn no_deadline_never_expires() {
        let listing = Listing {
            text: "Grant with no tag".into(),
            deadline: None,
        };
        assert!(!listing.is_expired(date("2099-12-31")));
    }
}
