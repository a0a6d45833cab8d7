//! # shotcraft-generator
//!
//! Screenshot and Figma to Angular project generation.
//!
//! The [`Generator`] drives one generation end to end:
//! 1. Describe the input: a [`VisionModel`] for screenshots, a
//!    [`DesignSource`] plus [`FigmaDesign::describe`] for Figma designs
//! 2. Ask a [`CompletionModel`] for component code
//! 3. Parse the answer with [`response::parse_response`]
//! 4. Assemble the project and package it into a verified archive
//!
//! HTTP implementations are provided for OpenAI, Anthropic and Figma; any
//! of them can be replaced through the traits in [`provider`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod anthropic;
pub mod config;
pub mod figma;
mod http;
pub mod image;
pub mod openai;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod response;

pub use anthropic::AnthropicClient;
pub use config::{CONFIG_FILE_NAME, ProviderKind, Settings};
pub use figma::{FigmaClient, FigmaDesign, FigmaRequest};
pub use image::{media_type_for_path, validate_image};
pub use openai::OpenAiClient;
pub use pipeline::{GeneratedProject, Generator};
pub use provider::{CompletionModel, DesignSource, VisionModel};
pub use response::{GenerationResult, parse_response};
