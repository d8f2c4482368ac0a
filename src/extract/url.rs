//! URL scanner.

use super::EntityScanner;
use crate::entity::{Entity, EntityType};

const PROTOCOLS: [&str; 2] = ["http://", "https://"];

/// A scanner that recognizes `http` and `https` URLs.
///
/// Every occurrence of a protocol prefix is extended forward until
/// whitespace, a bracket or angle character, or the end of the text. The
/// candidate is kept only if its host (everything up to the first `/` after
/// the scheme) is two or more dot-separated labels of ASCII letters, digits
/// and hyphens.
#[derive(Clone, Debug, Default)]
pub struct UrlScanner;

impl UrlScanner {
    /// Create a new URL scanner.
    pub fn new() -> Self {
        UrlScanner
    }

    /// Check if `candidate` is a well-formed http(s) URL.
    pub fn is_url(candidate: &str) -> bool {
        let mut parts = candidate.split("://");
        let (Some(scheme), Some(rest), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        if !matches!(scheme, "http" | "https") || rest.is_empty() {
            return false;
        }

        let host = rest.split('/').next().unwrap_or_default();
        let mut labels = 0;
        for label in host.split('.') {
            if label.is_empty()
                || !label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
            {
                return false;
            }
            labels += 1;
        }
        labels >= 2
    }

    /// Find the end of a URL starting at `from`.
    fn url_end(text: &str, from: usize) -> usize {
        text[from..]
            .char_indices()
            .find(|&(_, c)| is_terminator(c))
            .map_or(text.len(), |(offset, _)| from + offset)
    }
}

fn is_terminator(c: char) -> bool {
    matches!(
        c,
        ' ' | '\n' | '\r' | '\t' | '<' | '>' | '(' | ')' | '[' | ']' | '{' | '}'
    )
}

impl EntityScanner for UrlScanner {
    fn scan(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for protocol in PROTOCOLS {
            let mut search_start = 0;
            while let Some(found) = text[search_start..].find(protocol) {
                let start = search_start + found;
                let end = Self::url_end(text, start + protocol.len());

                if Self::is_url(&text[start..end]) {
                    entities.push(Entity::from_span(EntityType::Url, text, start, end));
                }

                // Resume after this match so a prefix is never rescanned
                search_start = end;
            }
        }

        entities
    }

    fn name(&self) -> &'static str {
        "url"
    }
}
