//! Entity extraction over the raw input text.
//!
//! The extractor runs independent scanners against [`IntentResult::text`]
//! (not the token stream) and appends every match as an [`Entity`]. Scanners
//! are order-insensitive and may report overlapping or duplicate ranges; a
//! phone-like digit run, for example, also surfaces as a number. No
//! cross-scanner deduplication is performed.
//!
//! # Available Scanners
//!
//! - [`email::EmailScanner`] - Addresses with a dotted domain and 2+ letter TLD
//! - [`phone::PhoneScanner`] - 10 to 15 digits with `- . ( )` separators
//! - [`url::UrlScanner`] - `http://` and `https://` URLs with a dotted host
//! - [`number::NumberScanner`] - Integers and decimals
//!
//! # Examples
//!
//! ```
//! use miniparse::entity::EntityType;
//! use miniparse::extract::extract;
//! use miniparse::result::IntentResult;
//!
//! let result = extract(IntentResult::new("mail jane@example.com", Vec::new()));
//! assert_eq!(result.entities.len(), 1);
//! assert_eq!(result.entities[0].entity_type, EntityType::Email);
//! assert_eq!(result.entities[0].start, 5);
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::entity::Entity;
use crate::error::Result;
use crate::result::IntentResult;
use crate::stage::Stage;

/// Trait for scanners that recognize one kind of entity in raw text.
///
/// Scanning is total: a candidate that fails validation is simply not
/// reported. Offsets of the returned entities are exact scan positions in
/// `text`.
pub trait EntityScanner: Send + Sync {
    /// Find all entities of this scanner's kind in `text`, in scan order.
    fn scan(&self, text: &str) -> Vec<Entity>;

    /// Get the name of this scanner (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Toggles for the built-in scanners. All are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    pub extract_emails: bool,
    pub extract_phones: bool,
    pub extract_urls: bool,
    pub extract_numbers: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            extract_emails: true,
            extract_phones: true,
            extract_urls: true,
            extract_numbers: true,
        }
    }
}

/// A pipeline stage that appends entities found by its scanners.
#[derive(Clone)]
pub struct EntityExtractor {
    scanners: Vec<Arc<dyn EntityScanner>>,
}

impl EntityExtractor {
    /// Create an extractor with the built-in scanners enabled in `config`.
    ///
    /// Scanners run in the order email, phone, URL, number.
    pub fn new(config: ExtractionConfig) -> Self {
        let mut scanners: Vec<Arc<dyn EntityScanner>> = Vec::new();
        if config.extract_emails {
            scanners.push(Arc::new(email::EmailScanner::new()));
        }
        if config.extract_phones {
            scanners.push(Arc::new(phone::PhoneScanner::new()));
        }
        if config.extract_urls {
            scanners.push(Arc::new(url::UrlScanner::new()));
        }
        if config.extract_numbers {
            scanners.push(Arc::new(number::NumberScanner::new()));
        }
        EntityExtractor { scanners }
    }

    /// Create an extractor without any scanners.
    pub fn empty() -> Self {
        EntityExtractor {
            scanners: Vec::new(),
        }
    }

    /// Add a scanner, run after the existing ones.
    pub fn add_scanner(mut self, scanner: Arc<dyn EntityScanner>) -> Self {
        self.scanners.push(scanner);
        self
    }

    /// Get the scanners used by this extractor.
    pub fn scanners(&self) -> &[Arc<dyn EntityScanner>] {
        &self.scanners
    }

    /// Run every scanner over `text`.
    pub fn scan(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();
        for scanner in &self.scanners {
            let found = scanner.scan(text);
            trace!(scanner = scanner.name(), matches = found.len(), "scan complete");
            entities.extend(found);
        }
        entities
    }

    /// Append the entities found in `result.text()` to `result.entities`.
    pub fn extract(&self, mut result: IntentResult) -> IntentResult {
        let found = self.scan(result.text());
        result.entities.extend(found);
        result
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

#[async_trait]
impl Stage for EntityExtractor {
    async fn apply(&self, input: IntentResult) -> Result<IntentResult> {
        Ok(self.extract(input))
    }

    fn name(&self) -> &'static str {
        "extract"
    }
}

impl std::fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityExtractor")
            .field(
                "scanners",
                &self.scanners.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Run the default extractor (all scanners enabled) over `result`.
pub fn extract(result: IntentResult) -> IntentResult {
    EntityExtractor::default().extract(result)
}

/// Characters that separate email and phone candidates.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '(' | ')' | '<' | '>' | '[' | ']' | '{' | '}')
}

/// Split `text` on delimiter runs, yielding each non-empty piece with its
/// byte offset.
pub(crate) fn candidates(text: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut start = None;

    for (offset, c) in text.char_indices() {
        if is_delimiter(c) {
            if let Some(s) = start.take() {
                pieces.push((s, &text[s..offset]));
            }
        } else if start.is_none() {
            start = Some(offset);
        }
    }
    if let Some(s) = start {
        pieces.push((s, &text[s..]));
    }

    pieces
}

pub mod email;
pub mod number;
pub mod phone;
pub mod url;

pub use email::EmailScanner;
pub use number::NumberScanner;
pub use phone::PhoneScanner;
pub use url::UrlScanner;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityType;

    #[test]
    fn test_candidates() {
        let pieces = candidates("  a,b;(c)  <d>\te ");
        assert_eq!(
            pieces,
            vec![(2, "a"), (4, "b"), (7, "c"), (12, "d"), (15, "e")]
        );
        assert!(candidates("").is_empty());
        assert!(candidates(" ,; ").is_empty());
    }

    #[test]
    fn test_extract_all_kinds() {
        let text = "Mail bob@mail.example.org or call 555-123-4567, see http://docs.rs for 2.5 hours";
        let result = extract(IntentResult::new(text, Vec::new()));

        let kinds: Vec<_> = result
            .entities
            .iter()
            .map(|e| (e.entity_type.as_str(), e.value.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("email", "bob@mail.example.org"),
                ("phone", "555-123-4567"),
                ("url", "http://docs.rs"),
                ("number", "555"),
                ("number", "123"),
                ("number", "4567"),
                ("number", "2.5"),
            ]
        );
        for entity in &result.entities {
            assert_eq!(&text[entity.start..entity.end], entity.value);
        }
    }

    #[test]
    fn test_toggles() {
        let config = ExtractionConfig {
            extract_numbers: false,
            extract_phones: false,
            ..ExtractionConfig::default()
        };
        let extractor = EntityExtractor::new(config);
        assert_eq!(extractor.scanners().len(), 2);

        let result = extractor.extract(IntentResult::new("call 5551234567", Vec::new()));
        assert!(result.entities.is_empty());
    }

    #[test]
    fn test_custom_scanner() {
        struct HashtagScanner;

        impl EntityScanner for HashtagScanner {
            fn scan(&self, text: &str) -> Vec<Entity> {
                candidates(text)
                    .into_iter()
                    .filter(|(_, piece)| piece.starts_with('#') && piece.len() > 1)
                    .map(|(start, piece)| Entity::new("hashtag", piece, start, start + piece.len()))
                    .collect()
            }

            fn name(&self) -> &'static str {
                "hashtag"
            }
        }

        let extractor = EntityExtractor::empty().add_scanner(Arc::new(HashtagScanner));
        let result = extractor.extract(IntentResult::new("love #rust", Vec::new()));

        assert_eq!(result.entities.len(), 1);
        assert_eq!(
            result.entities[0].entity_type,
            EntityType::Custom("hashtag".to_string())
        );
        assert_eq!(result.entities[0].start, 5);
    }

    #[tokio::test]
    async fn test_extractor_as_stage() {
        let extractor = EntityExtractor::default();
        let result = extractor
            .apply(IntentResult::new("v 1.5", Vec::new()))
            .await
            .unwrap();

        assert_eq!(result.entities.len(), 1);
        assert_eq!(result.entities[0].value, "1.5");
        assert_eq!(extractor.name(), "extract");
    }
}
