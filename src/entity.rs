//! Entities recognized in the raw input text.
//!
//! Unlike tokens, entities do not partition the text. They may overlap each
//! other and ignore token boundaries entirely; each one marks a substring of
//! interest by its offsets in the original input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a recognized entity.
///
/// The built-in extractor produces the four named kinds. Custom stages can
/// attach their own kinds through [`EntityType::Custom`]. All kinds serialize
/// as a plain lowercase string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    Email,
    Phone,
    Url,
    Number,
    Custom(String),
}

impl EntityType {
    pub fn as_str(&self) -> &str {
        match self {
            EntityType::Email => "email",
            EntityType::Phone => "phone",
            EntityType::Url => "url",
            EntityType::Number => "number",
            EntityType::Custom(name) => name,
        }
    }
}

impl From<String> for EntityType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "email" => EntityType::Email,
            "phone" => EntityType::Phone,
            "url" => EntityType::Url,
            "number" => EntityType::Number,
            _ => EntityType::Custom(name),
        }
    }
}

impl From<&str> for EntityType {
    fn from(name: &str) -> Self {
        EntityType::from(name.to_string())
    }
}

impl From<EntityType> for String {
    fn from(entity_type: EntityType) -> Self {
        match entity_type {
            EntityType::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A recognized substring of interest.
///
/// `start` and `end` are half-open byte offsets into the original input,
/// never into a cleaned or filtered copy of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Kind of the entity
    #[serde(rename = "type")]
    pub entity_type: EntityType,

    /// The matched text, verbatim
    pub value: String,

    /// The byte offset where the entity starts in the original text
    pub start: usize,

    /// The byte offset where the entity ends in the original text
    pub end: usize,
}

impl Entity {
    /// Create a new entity.
    pub fn new<T, S>(entity_type: T, value: S, start: usize, end: usize) -> Self
    where
        T: Into<EntityType>,
        S: Into<String>,
    {
        Entity {
            entity_type: entity_type.into(),
            value: value.into(),
            start,
            end,
        }
    }

    /// Create an entity from the slice `text[start..end]`.
    pub(crate) fn from_span(entity_type: EntityType, text: &str, start: usize, end: usize) -> Self {
        Entity {
            entity_type,
            value: text[start..end].to_string(),
            start,
            end,
        }
    }

    /// Check if this entity's range intersects `other`'s.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.value)
    }
}
