//! Token types produced by the tokenizer.
//!
//! A [`Token`] is a maximal run of characters sharing one lexical category,
//! together with that category and its offsets in the original text.
//!
//! # Examples
//!
//! ```
//! use miniparse::token::{Token, TokenType};
//!
//! let token = Token::new("hello", TokenType::Word, 0, 5);
//! assert_eq!(token.value, "hello");
//! assert_eq!(token.len(), 5);
//! assert!(token.is_word());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single lexical unit of the input text.
///
/// `start` and `end` are half-open byte offsets into the original text
/// (`end` exclusive). The tokens produced for a text partition it exactly,
/// so `&text[token.start..token.end]` is always valid. The `value` may differ
/// from that slice when the tokenizer lowercases words.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub value: String,

    /// Lexical category of the token
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// The byte offset where this token starts in the original text
    pub start: usize,

    /// The byte offset where this token ends in the original text
    pub end: usize,
}

/// Lexical category of a token.
///
/// This is a closed set; every character of the input falls into exactly one
/// category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// ASCII letters and the extended Latin band
    Word,
    /// ASCII digits
    Number,
    /// Sentence punctuation such as `.` `,` `(` `"`
    Punct,
    /// Other ASCII symbols and the wide non-ASCII symbol band
    Symbol,
    /// Space, tab, carriage return and line feed
    Whitespace,
    /// Anything not covered above
    Unknown,
}

impl TokenType {
    /// The lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Word => "word",
            TokenType::Number => "number",
            TokenType::Punct => "punct",
            TokenType::Symbol => "symbol",
            TokenType::Whitespace => "whitespace",
            TokenType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(value: S, token_type: TokenType, start: usize, end: usize) -> Self {
        Token {
            value: value.into(),
            token_type,
            start,
            end,
        }
    }

    /// Length of the covered range in the original text, in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the token covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of `text` this token was produced from.
    ///
    /// Returns `None` if the offsets do not fit `text`.
    pub fn source<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }

    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    pub fn is_whitespace(&self) -> bool {
        self.token_type == TokenType::Whitespace
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
