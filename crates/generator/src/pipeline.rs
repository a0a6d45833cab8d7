//! The generation pipeline.
//!
//! Both entry points share one tail:
//! describe → complete → parse → assemble → package.
//! Only the description step differs: a vision model call for screenshots,
//! a Figma fetch plus summary for designs.

use crate::anthropic::AnthropicClient;
use crate::config::{ProviderKind, Settings};
use crate::figma::{FigmaClient, FigmaRequest};
use crate::image::validate_image;
use crate::openai::OpenAiClient;
use crate::prompt::{CODE_SYSTEM, code_prompt};
use crate::provider::{CompletionModel, DesignSource, VisionModel};
use crate::response::{GenerationResult, parse_response};
use shotcraft_codegen::ProjectAssembler;
use shotcraft_core::{Error, Result, VirtualFileTree};
use shotcraft_packaging::{DEFAULT_ROOT_FOLDER, PackagedProject, package};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Component name used when a screenshot answer names no component.
pub const IMAGE_COMPONENT_NAME: &str = "ui-component";
/// Component name used when a Figma answer names no component.
pub const FIGMA_COMPONENT_NAME: &str = "figma-component";

/// Default largest accepted image.
const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Output of one generation.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    /// Parsed model output the project was assembled from
    pub generation: GenerationResult,
    /// Assembled project
    pub tree: VirtualFileTree,
    /// Packaged archive of `tree`
    pub archive: PackagedProject,
}

/// Runs generations against a fixed set of collaborators.
///
/// A generator holds no per-request state; concurrent calls are independent.
pub struct Generator {
    vision: Arc<dyn VisionModel>,
    completion: Arc<dyn CompletionModel>,
    design: Arc<dyn DesignSource>,
    assembler: ProjectAssembler,
    project_name: String,
    max_image_bytes: u64,
}

impl Generator {
    /// Create a generator over explicit collaborators, with default limits.
    #[must_use]
    pub fn new(
        vision: Arc<dyn VisionModel>,
        completion: Arc<dyn CompletionModel>,
        design: Arc<dyn DesignSource>,
    ) -> Self {
        Self {
            vision,
            completion,
            design,
            assembler: ProjectAssembler::new(),
            project_name: DEFAULT_ROOT_FOLDER.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    /// Create a generator with HTTP clients for the configured provider.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the selected provider has no API key
    /// or an HTTP client cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.api_key().ok_or_else(|| {
            let variable = match settings.provider {
                ProviderKind::OpenAi => "OPENAI_API_KEY",
                ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            };
            Error::configuration(format!(
                "No API key configured for provider {}. Set {variable}",
                settings.provider
            ))
        })?;
        let timeout = settings.request_timeout();

        let (vision, completion): (Arc<dyn VisionModel>, Arc<dyn CompletionModel>) =
            match settings.provider {
                ProviderKind::OpenAi => (
                    Arc::new(OpenAiClient::new(
                        &settings.openai_api_base,
                        api_key,
                        settings.vision_model(),
                        settings.max_tokens,
                        timeout,
                    )?),
                    Arc::new(OpenAiClient::new(
                        &settings.openai_api_base,
                        api_key,
                        settings.code_model(),
                        settings.max_tokens,
                        timeout,
                    )?),
                ),
                ProviderKind::Anthropic => (
                    Arc::new(AnthropicClient::new(
                        &settings.anthropic_api_base,
                        api_key,
                        settings.vision_model(),
                        settings.max_tokens,
                        timeout,
                    )?),
                    Arc::new(AnthropicClient::new(
                        &settings.anthropic_api_base,
                        api_key,
                        settings.code_model(),
                        settings.max_tokens,
                        timeout,
                    )?),
                ),
            };
        let design = Arc::new(FigmaClient::new(
            &settings.figma_api_base,
            settings.figma_access_token.clone(),
            timeout,
        )?);

        debug!(
            provider = %settings.provider,
            vision_model = settings.vision_model(),
            code_model = settings.code_model(),
            "Configured generator"
        );
        Ok(Self::new(vision, completion, design)
            .with_project_name(settings.project_name.clone())
            .with_max_image_bytes(settings.max_image_bytes()))
    }

    /// Top-level folder name inside produced archives.
    #[must_use]
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    /// Largest accepted image in bytes.
    #[must_use]
    pub const fn with_max_image_bytes(mut self, max_image_bytes: u64) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    /// Top-level folder name inside produced archives.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Generate a project from a screenshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a bad image, a provider error if a
    /// model call fails, or a packaging error if the archive fails its check.
    #[instrument(name = "generate_from_image", skip_all, fields(media_type = %media_type, bytes = image.len()))]
    pub async fn from_image(&self, image: &[u8], media_type: &str) -> Result<GeneratedProject> {
        validate_image(image, media_type, self.max_image_bytes)?;

        let description = self.vision.describe_image(image, media_type).await?;
        debug!(
            provider = self.vision.name(),
            chars = description.len(),
            "Received image description"
        );

        self.generate(&description, IMAGE_COMPONENT_NAME).await
    }

    /// Generate a project from a Figma design.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a bad URL or a missing token, a
    /// provider error if Figma or the model fails, or a packaging error if
    /// the archive fails its check.
    #[instrument(name = "generate_from_figma", skip_all, fields(url = %request.url))]
    pub async fn from_figma(&self, request: &FigmaRequest) -> Result<GeneratedProject> {
        let design = self.design.fetch(request).await?;
        let description = design.describe();
        debug!(chars = description.len(), "Summarized Figma design");

        self.generate(&description, FIGMA_COMPONENT_NAME).await
    }

    async fn generate(&self, description: &str, fallback_name: &str) -> Result<GeneratedProject> {
        let answer = self
            .completion
            .complete(CODE_SYSTEM, &code_prompt(description))
            .await?;
        debug!(
            provider = self.completion.name(),
            chars = answer.len(),
            "Received generated code"
        );

        let generation = parse_response(&answer, fallback_name);
        let tree = self
            .assembler
            .assemble(&generation.components, generation.routing.as_deref());
        let archive = package(&tree, &self.project_name)?;

        info!(
            components = generation.components.len(),
            files = archive.entry_count,
            sha256 = %archive.sha256,
            "Generated project"
        );
        Ok(GeneratedProject {
            generation,
            tree,
            archive,
        })
    }
}
