//! Email address scanner.

use std::sync::LazyLock;

use regex::Regex;

use super::{EntityScanner, candidates};
use crate::entity::{Entity, EntityType};

/// One local part, one `@`, a dot-separated domain and a 2+ letter TLD.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Email pattern should be valid")
});

/// A scanner that recognizes email addresses.
///
/// The text is split on whitespace and `,;()<>[]{}`; every piece containing
/// `@` is validated against a strict address pattern as a whole.
#[derive(Clone, Debug, Default)]
pub struct EmailScanner;

impl EmailScanner {
    /// Create a new email scanner.
    pub fn new() -> Self {
        EmailScanner
    }

    /// Check if `candidate` is a complete email address.
    pub fn is_email(candidate: &str) -> bool {
        candidate.contains('@') && EMAIL_PATTERN.is_match(candidate)
    }
}

impl EntityScanner for EmailScanner {
    fn scan(&self, text: &str) -> Vec<Entity> {
        candidates(text)
            .into_iter()
            .filter(|(_, piece)| Self::is_email(piece))
            .map(|(start, piece)| {
                Entity::from_span(EntityType::Email, text, start, start + piece.len())
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_scanner() {
        let text = "contact me at jane.doe@example.com please";
        let entities = EmailScanner::new().scan(text);

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].value, "jane.doe@example.com");
        assert_eq!(entities[0].start, 14);
        assert_eq!(entities[0].end, 34);
    }

    #[test]
    fn test_delimited_email() {
        let entities = EmailScanner::new().scan("Jane <jane+news@mail.co.uk>; bob@x.io");
        let values: Vec<_> = entities.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["jane+news@mail.co.uk", "bob@x.io"]);
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!EmailScanner::is_email("jane@localhost"));
        assert!(!EmailScanner::is_email("jane@@example.com"));
        assert!(!EmailScanner::is_email("jane@example.c"));
        assert!(!EmailScanner::is_email("@example.com"));
        assert!(!EmailScanner::is_email("jane@example.com."));
        assert!(!EmailScanner::is_email("example.com"));
    }

    #[test]
    fn test_repeated_email_offsets() {
        let text = "a@b.io and a@b.io";
        let entities = EmailScanner::new().scan(text);

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].start, 0);
        assert_eq!(entities[1].start, 11);
    }
}
