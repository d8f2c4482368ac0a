//! Pipeline that combines a tokenizer with an ordered list of stages.
//!
//! # Architecture
//!
//! A pipeline run applies processing in this order:
//! 1. Tokenizer: Splits the text into the initial token list
//! 2. Stages: Applied sequentially in the order they were added
//!
//! Each stage receives the result of all prior stages and is awaited to
//! completion before the next one starts. The first stage error aborts the
//! run and is returned unchanged; no partial result is produced.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use miniparse::extract::EntityExtractor;
//! use miniparse::pipeline::Pipeline;
//! use miniparse::stage::CleanStage;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let pipeline = Pipeline::new()
//!     .add_stage(Arc::new(CleanStage::new()))
//!     .add_stage(Arc::new(EntityExtractor::default()));
//!
//! let result = pipeline.process("Call 555-123-4567 now").await.unwrap();
//! assert_eq!(result.text(), "Call 555-123-4567 now");
//! assert_eq!(result.entities[0].value, "555-123-4567");
//! # }
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::config::MiniparseConfig;
use crate::error::{MiniparseError, Result};
use crate::extract::EntityExtractor;
use crate::result::IntentResult;
use crate::stage::{CleanStage, Stage};
use crate::tokenizer::{CharClassTokenizer, Tokenizer, TokenizerConfig};

/// An ordered composition of tokenization and registered stages.
///
/// The stage list is only modified while building; `process` takes `&self`,
/// so one pipeline can serve concurrent runs on independent inputs.
#[derive(Clone)]
pub struct Pipeline {
    tokenizer: Arc<dyn Tokenizer>,
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    /// Create a pipeline with the default tokenizer and no stages.
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(CharClassTokenizer::new(TokenizerConfig::default())))
    }

    /// Create a pipeline with the given tokenizer and no stages.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Pipeline {
            tokenizer,
            stages: Vec::new(),
        }
    }

    /// Build a pipeline from a configuration.
    ///
    /// The tokenizer uses `config.tokenizer`. [`CleanStage`] is registered
    /// when cleaning is enabled, followed by an [`EntityExtractor`] with the
    /// configured scanner toggles when extraction is enabled.
    pub fn from_config(config: &MiniparseConfig) -> Self {
        let mut pipeline =
            Self::with_tokenizer(Arc::new(CharClassTokenizer::new(config.tokenizer)));
        if config.pipeline.enable_cleaning {
            pipeline = pipeline.add_stage(Arc::new(CleanStage::new()));
        }
        if config.pipeline.enable_extraction {
            pipeline = pipeline.add_stage(Arc::new(EntityExtractor::new(config.extraction)));
        }
        pipeline
    }

    /// Register a stage after all previously added ones.
    #[doc(alias = "use")]
    pub fn add_stage(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Get the tokenizer used by this pipeline.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the registered stages, in execution order.
    pub fn stages(&self) -> &[Arc<dyn Stage>] {
        &self.stages
    }

    /// Run the pipeline once over `text`.
    pub async fn process(&self, text: &str) -> Result<IntentResult> {
        let tokens = self.tokenizer.tokenize(text);
        debug!(
            tokenizer = self.tokenizer.name(),
            tokens = tokens.len(),
            stages = self.stages.len(),
            "pipeline started"
        );

        let mut result = IntentResult::new(text, tokens);
        for stage in &self.stages {
            result = stage.apply(result).await?;
            if result.text() != text {
                return Err(MiniparseError::stage(
                    stage.name(),
                    "stage replaced the input text",
                ));
            }
            debug!(
                stage = stage.name(),
                tokens = result.tokens.len(),
                entities = result.entities.len(),
                "stage completed"
            );
        }

        debug!(
            tokens = result.tokens.len(),
            entities = result.entities.len(),
            "pipeline finished"
        );
        Ok(result)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "stages",
                &self.stages.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
