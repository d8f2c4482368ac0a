//! Tokenizer implementations for text segmentation.
//!
//! Tokenizers are the first step of every pipeline run: they break the input
//! text into typed tokens that later stages filter or annotate.
//!
//! # Available Tokenizers
//!
//! - [`char_class::CharClassTokenizer`] - Groups runs of same-category characters
//!
//! # Examples
//!
//! ```
//! use miniparse::tokenizer::{Tokenizer, TokenizerConfig};
//! use miniparse::tokenizer::char_class::CharClassTokenizer;
//!
//! let tokenizer = CharClassTokenizer::new(TokenizerConfig::default());
//! let tokens = tokenizer.tokenize("Hello world");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].value, "hello");
//! ```

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization is total: every input, including the empty string, yields a
/// well-formed (possibly empty) token list. The trait requires `Send + Sync`
/// so a tokenizer can be shared by concurrent pipeline runs.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use miniparse::token::{Token, TokenType};
/// use miniparse::tokenizer::Tokenizer;
///
/// struct WholeTextTokenizer;
///
/// impl Tokenizer for WholeTextTokenizer {
///     fn tokenize(&self, text: &str) -> Vec<Token> {
///         if text.is_empty() {
///             return Vec::new();
///         }
///         vec![Token::new(text, TokenType::Unknown, 0, text.len())]
///     }
///
///     fn name(&self) -> &'static str {
///         "whole_text"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into tokens ordered by offset.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Configuration for [`char_class::CharClassTokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Lowercase the value of word tokens (default: true).
    pub lowercase: bool,

    /// Merge runs of adjacent symbol characters into one token (default: false).
    pub merge_symbols: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            merge_symbols: false,
        }
    }
}

impl TokenizerConfig {
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_merge_symbols(mut self, merge_symbols: bool) -> Self {
        self.merge_symbols = merge_symbols;
        self
    }
}

/// Tokenize `text` with a [`char_class::CharClassTokenizer`] built from `config`.
pub fn tokenize(text: &str, config: &TokenizerConfig) -> Vec<Token> {
    char_class::CharClassTokenizer::new(*config).tokenize(text)
}

pub mod char_class;

pub use char_class::CharClassTokenizer;
