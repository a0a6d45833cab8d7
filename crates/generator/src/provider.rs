//! Seams to the external services the pipeline talks to.
//!
//! - [`VisionModel`] turns a screenshot into a textual UI description
//! - [`CompletionModel`] turns a description into component code
//! - [`DesignSource`] fetches a design document from Figma
//!
//! The HTTP implementations live in [`crate::openai`], [`crate::anthropic`]
//! and [`crate::figma`]; tests substitute in-memory stubs.

use crate::figma::{FigmaDesign, FigmaRequest};
use async_trait::async_trait;
use shotcraft_core::Result;

/// A model that can describe an image.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Provider name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Describe the UI shown in `image`.
    ///
    /// `media_type` is the image's MIME type, e.g. `image/png`.
    async fn describe_image(&self, image: &[u8], media_type: &str) -> Result<String>;
}

/// A text completion model.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Provider name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Complete `prompt` under the `system` instruction.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}

/// A source of design documents.
#[async_trait]
pub trait DesignSource: Send + Sync {
    /// Fetch the file, and the requested node if any.
    async fn fetch(&self, request: &FigmaRequest) -> Result<FigmaDesign>;
}
