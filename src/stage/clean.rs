//! Cleaning stage implementation.
//!
//! This module provides a stage that drops punctuation and symbol tokens, and
//! a text-level helper that strips the same kind of characters from a string
//! before it enters a pipeline.
//!
//! # Examples
//!
//! ```
//! use miniparse::stage::clean::clean_text;
//!
//! assert_eq!(clean_text("Hello, world! (again)"), "Hello world again");
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::result::IntentResult;
use crate::stage::Stage;
use crate::token::TokenType;

/// Characters removed by [`clean_text`].
const CLEAN_CHARS: &str = ".,/#!$%^&*;:{}=-_`~()";

/// Remove punctuation-like characters from `text`.
pub fn clean_text(text: &str) -> String {
    text.chars().filter(|c| !CLEAN_CHARS.contains(*c)).collect()
}

/// A stage that removes punctuation and symbol tokens.
///
/// Retained tokens keep their original offsets. The input text and any
/// already-recognized entities are left untouched.
#[derive(Clone, Debug, Default)]
pub struct CleanStage {
    remove_whitespace: bool,
}

impl CleanStage {
    /// Create a new cleaning stage that keeps whitespace tokens.
    pub fn new() -> Self {
        CleanStage::default()
    }

    /// Also remove whitespace tokens.
    pub fn remove_whitespace(mut self, remove: bool) -> Self {
        self.remove_whitespace = remove;
        self
    }

    fn keeps(&self, token_type: TokenType) -> bool {
        match token_type {
            TokenType::Punct | TokenType::Symbol => false,
            TokenType::Whitespace => !self.remove_whitespace,
            _ => true,
        }
    }
}

#[async_trait]
impl Stage for CleanStage {
    async fn apply(&self, mut input: IntentResult) -> Result<IntentResult> {
        input.tokens.retain(|t| self.keeps(t.token_type));
        Ok(input)
    }

    fn name(&self) -> &'static str {
        "clean"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{TokenizerConfig, tokenize};

    fn result_for(text: &str) -> IntentResult {
        IntentResult::new(text, tokenize(text, &TokenizerConfig::default()))
    }

    #[tokio::test]
    async fn test_clean_stage() {
        let result = CleanStage::new()
            .apply(result_for("Hi, you & me!"))
            .await
            .unwrap();

        let values: Vec<_> = result.tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["hi", " ", "you", " ", " ", "me"]);
        assert_eq!(result.text(), "Hi, you & me!");
    }

    #[tokio::test]
    async fn test_clean_stage_keeps_offsets() {
        let result = CleanStage::new()
            .remove_whitespace(true)
            .apply(result_for("(a) b"))
            .await
            .unwrap();

        assert_eq!(result.tokens.len(), 2);
        assert_eq!((result.tokens[0].start, result.tokens[0].end), (1, 2));
        assert_eq!((result.tokens[1].start, result.tokens[1].end), (4, 5));
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("a-b_c=d"), "abcd");
        assert_eq!(clean_text("no change"), "no change");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_stage_name() {
        assert_eq!(CleanStage::new().name(), "clean");
    }
}
