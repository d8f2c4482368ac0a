//! # miniparse
//!
//! A lightweight natural-language preprocessing toolkit.
//!
//! ## Features
//!
//! - Character-class tokenizer with exact byte offsets
//! - Email, phone, URL and number extraction over the raw text
//! - Composable pipelines of synchronous and asynchronous stages
//! - Speech-disfluency preprocessing (fillers, repetitions, stutters)
//! - JSON configuration and a command-line front end

pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod result;
pub mod speech;
pub mod stage;
pub mod token;
pub mod tokenizer;

pub mod prelude {
    pub use crate::config::MiniparseConfig;
    pub use crate::entity::{Entity, EntityType};
    pub use crate::error::{MiniparseError, Result};
    pub use crate::extract::{EntityExtractor, EntityScanner, ExtractionConfig, extract};
    pub use crate::pipeline::Pipeline;
    pub use crate::result::IntentResult;
    pub use crate::stage::{AsyncFnStage, CleanStage, FnStage, Stage};
    pub use crate::token::{Token, TokenType};
    pub use crate::tokenizer::{CharClassTokenizer, Tokenizer, TokenizerConfig, tokenize};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
