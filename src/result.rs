//! The accumulated result threaded through a pipeline run.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityType};
use crate::token::{Token, TokenType};

/// Tokens and entities recognized for one input text.
///
/// The input text is fixed at creation and cannot be changed afterwards.
/// `tokens` and `entities` are free for stages to filter, reorder or extend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    text: String,

    /// Tokens, initially the tokenizer output in text order
    pub tokens: Vec<Token>,

    /// Entities appended by extraction stages
    pub entities: Vec<Entity>,
}

impl IntentResult {
    /// Create a result for `text` with an initial token list and no entities.
    pub fn new<S: Into<String>>(text: S, tokens: Vec<Token>) -> Self {
        IntentResult {
            text: text.into(),
            tokens,
            entities: Vec::new(),
        }
    }

    /// The original input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Entities of the given kind, in the order they were recorded.
    pub fn entities_of<'a>(
        &'a self,
        entity_type: &'a EntityType,
    ) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities
            .iter()
            .filter(move |e| &e.entity_type == entity_type)
    }

    /// Tokens of the given category, in order.
    pub fn tokens_of(&self, token_type: TokenType) -> impl Iterator<Item = &Token> + '_ {
        self.tokens
            .iter()
            .filter(move |t| t.token_type == token_type)
    }
}
