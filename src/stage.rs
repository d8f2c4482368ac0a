//! Pipeline stages.
//!
//! A stage consumes the accumulated [`IntentResult`] of all prior stages and
//! returns a replacement. Stages may filter, reorder or append tokens and
//! entities, but never change the input text.
//!
//! # Available Stages
//!
//! - [`clean::CleanStage`] - Drops punctuation and symbol tokens
//! - [`crate::extract::EntityExtractor`] - Recognizes emails, phones, URLs and numbers
//! - [`FnStage`] - Wraps a synchronous closure
//! - [`AsyncFnStage`] - Wraps a closure returning a future
//!
//! # Examples
//!
//! Implementing a custom stage:
//!
//! ```
//! use async_trait::async_trait;
//! use miniparse::error::Result;
//! use miniparse::result::IntentResult;
//! use miniparse::stage::Stage;
//!
//! struct DropWhitespace;
//!
//! #[async_trait]
//! impl Stage for DropWhitespace {
//!     async fn apply(&self, mut input: IntentResult) -> Result<IntentResult> {
//!         input.tokens.retain(|t| !t.is_whitespace());
//!         Ok(input)
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "drop_whitespace"
//!     }
//! }
//! ```

use std::future::Future;

use async_trait::async_trait;

use crate::error::Result;
use crate::result::IntentResult;

/// Trait for pipeline stages.
///
/// Every stage is treated as a suspension point: the pipeline awaits each
/// `apply` to completion before starting the next one. Synchronous stages
/// simply return without suspending.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Transform the accumulated result.
    ///
    /// Returning an error aborts the pipeline run; no later stage is invoked.
    async fn apply(&self, input: IntentResult) -> Result<IntentResult>;

    /// Get the name of this stage (for logging and error reports).
    fn name(&self) -> &'static str;
}

/// A stage backed by a synchronous closure.
///
/// ```
/// use miniparse::stage::FnStage;
///
/// let stage = FnStage::new("keep_words", |mut result: miniparse::result::IntentResult| {
///     result.tokens.retain(|t| t.is_word());
///     Ok(result)
/// });
/// ```
pub struct FnStage<F> {
    name: &'static str,
    func: F,
}

impl<F> FnStage<F>
where
    F: Fn(IntentResult) -> Result<IntentResult> + Send + Sync,
{
    pub fn new(name: &'static str, func: F) -> Self {
        FnStage { name, func }
    }
}

#[async_trait]
impl<F> Stage for FnStage<F>
where
    F: Fn(IntentResult) -> Result<IntentResult> + Send + Sync,
{
    async fn apply(&self, input: IntentResult) -> Result<IntentResult> {
        (self.func)(input)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// A stage backed by a closure returning a future.
///
/// ```
/// use miniparse::stage::AsyncFnStage;
///
/// let stage = AsyncFnStage::new("enrich", |result: miniparse::result::IntentResult| async move {
///     // look something up remotely...
///     Ok(result)
/// });
/// ```
pub struct AsyncFnStage<F> {
    name: &'static str,
    func: F,
}

impl<F, Fut> AsyncFnStage<F>
where
    F: Fn(IntentResult) -> Fut + Send + Sync,
    Fut: Future<Output = Result<IntentResult>> + Send,
{
    pub fn new(name: &'static str, func: F) -> Self {
        AsyncFnStage { name, func }
    }
}

#[async_trait]
impl<F, Fut> Stage for AsyncFnStage<F>
where
    F: Fn(IntentResult) -> Fut + Send + Sync,
    Fut: Future<Output = Result<IntentResult>> + Send,
{
    async fn apply(&self, input: IntentResult) -> Result<IntentResult> {
        (self.func)(input).await
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<F> std::fmt::Debug for FnStage<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStage").field("name", &self.name).finish()
    }
}

impl<F> std::fmt::Debug for AsyncFnStage<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncFnStage")
            .field("name", &self.name)
            .finish()
    }
}

pub mod clean;

pub use clean::CleanStage;
