//! Character-class tokenizer implementation.

use super::{Tokenizer, TokenizerConfig};
use crate::token::{Token, TokenType};

/// Characters classified as punctuation. Checked before the symbol bands.
const PUNCTUATION: &str = ".,!?;:()[]{}\"'`";

/// A tokenizer that classifies every character and groups runs of the same
/// category into one token.
///
/// Categories are evaluated in priority order: word, number, whitespace,
/// punct, symbol, unknown. A new token starts whenever the category changes.
/// Symbol characters additionally become one token each unless
/// [`TokenizerConfig::merge_symbols`] is set.
///
/// The produced tokens partition the input: concatenating the source slices
/// of all tokens reconstructs the text exactly.
#[derive(Clone, Debug, Default)]
pub struct CharClassTokenizer {
    config: TokenizerConfig,
}

impl CharClassTokenizer {
    /// Create a new tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        CharClassTokenizer { config }
    }

    /// Get the configuration of this tokenizer.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Classify a single character into its lexical category.
    pub fn classify(ch: char) -> TokenType {
        let code = ch as u32;
        if is_letter(code) {
            TokenType::Word
        } else if ch.is_ascii_digit() {
            TokenType::Number
        } else if matches!(ch, ' ' | '\t' | '\n' | '\r') {
            TokenType::Whitespace
        } else if PUNCTUATION.contains(ch) {
            TokenType::Punct
        } else if is_symbol(code) {
            TokenType::Symbol
        } else {
            TokenType::Unknown
        }
    }

    fn is_boundary(&self, next: TokenType, prev: TokenType) -> bool {
        next != prev || (next == TokenType::Symbol && !self.config.merge_symbols)
    }

    fn emit(&self, slice: &str, token_type: TokenType, start: usize, end: usize) -> Token {
        let value = if self.config.lowercase && token_type == TokenType::Word {
            slice.to_lowercase()
        } else {
            slice.to_string()
        };
        Token::new(value, token_type, start, end)
    }
}

impl Tokenizer for CharClassTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut current: Option<TokenType> = None;

        for (offset, ch) in text.char_indices() {
            let token_type = Self::classify(ch);
            match current {
                Some(prev) if self.is_boundary(token_type, prev) => {
                    tokens.push(self.emit(&text[start..offset], prev, start, offset));
                    start = offset;
                    current = Some(token_type);
                }
                Some(_) => {}
                None => current = Some(token_type),
            }
        }

        // Flush the trailing run
        if let Some(prev) = current {
            tokens.push(self.emit(&text[start..], prev, start, text.len()));
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "char_class"
    }
}

/// ASCII letters plus the Latin-1 Supplement through Latin Extended-B band.
fn is_letter(code: u32) -> bool {
    matches!(code, 65..=90 | 97..=122 | 128..=591)
}

/// ASCII punctuation/symbol ranges plus a wide band of non-ASCII symbols.
fn is_symbol(code: u32) -> bool {
    matches!(code, 33..=47 | 58..=64 | 91..=96 | 123..=126 | 8200..=129999)
}
