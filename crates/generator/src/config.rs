//! Generator settings.
//!
//! Settings are layered, later layers winning:
//! 1. Built-in defaults
//! 2. A TOML file (`--config`, or `shotcraft.toml` in the working directory)
//! 3. Environment variables
//! 4. Command line flags, applied by the CLI on the loaded value

use serde::{Deserialize, Serialize};
use shotcraft_core::{Error, Result};
use shotcraft_packaging::DEFAULT_ROOT_FOLDER;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// File looked up in the working directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "shotcraft.toml";

/// Model provider used for both image description and code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions
    #[default]
    OpenAi,
    /// Anthropic messages
    Anthropic,
}

impl ProviderKind {
    /// Lowercase provider identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(Error::configuration(format!(
                "Unsupported provider: {other}. Valid providers: openai, anthropic"
            ))),
        }
    }
}

/// All knobs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Provider for both model calls
    pub provider: ProviderKind,
    /// OpenAI API key
    pub openai_api_key: Option<String>,
    /// Anthropic API key
    pub anthropic_api_key: Option<String>,
    /// Figma personal access token, used when a request carries none
    pub figma_access_token: Option<String>,
    /// OpenAI model that describes images
    pub openai_vision_model: String,
    /// OpenAI model that writes components
    pub openai_code_model: String,
    /// Anthropic model that describes images
    pub anthropic_vision_model: String,
    /// Anthropic model that writes components
    pub anthropic_code_model: String,
    /// Completion token limit for every model call
    pub max_tokens: u32,
    /// Largest accepted image, in megabytes
    pub max_image_size_mb: u64,
    /// HTTP request timeout
    pub request_timeout_secs: u64,
    /// Top-level folder inside the archive and default output file stem
    pub project_name: String,
    /// Figma REST API base URL
    pub figma_api_base: String,
    /// OpenAI API base URL
    pub openai_api_base: String,
    /// Anthropic API base URL
    pub anthropic_api_base: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            openai_api_key: None,
            anthropic_api_key: None,
            figma_access_token: None,
            openai_vision_model: "gpt-4-vision-preview".to_string(),
            openai_code_model: "gpt-4".to_string(),
            anthropic_vision_model: "claude-3-sonnet-20240229".to_string(),
            anthropic_code_model: "claude-3-opus-20240229".to_string(),
            max_tokens: 4000,
            max_image_size_mb: 5,
            request_timeout_secs: 120,
            project_name: DEFAULT_ROOT_FOLDER.to_string(),
            figma_api_base: "https://api.figma.com/v1".to_string(),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            anthropic_api_base: "https://api.anthropic.com/v1".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional TOML file and the process environment.
    ///
    /// With `path`, that file must exist. Without it, `shotcraft.toml` in the
    /// working directory is read when present.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed,
    /// or an environment variable holds an invalid value.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(CONFIG_FILE_NAME).is_file() => {
                Self::from_file(Path::new(CONFIG_FILE_NAME))?
            }
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Read settings from a TOML file, without applying the environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "Loaded settings file");
        Self::from_toml_str(&content)
            .map_err(|e| Error::configuration(format!("{}: {e}", path.display())))
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the text is not valid settings TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid settings: {e}")))
    }

    /// Overlay values from environment variables, read through `lookup`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the provider variable names an
    /// unknown provider.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(provider) = get("SHOTCRAFT_PROVIDER").or_else(|| get("DEFAULT_VLM_PROVIDER")) {
            self.provider = provider.parse()?;
        }
        if let Some(key) = get("OPENAI_API_KEY") {
            self.openai_api_key = Some(key);
        }
        if let Some(key) = get("ANTHROPIC_API_KEY") {
            self.anthropic_api_key = Some(key);
        }
        if let Some(token) = get("FIGMA_ACCESS_TOKEN") {
            self.figma_access_token = Some(token);
        }
        if let Some(model) = get("OPENAI_MODEL") {
            self.openai_vision_model = model;
        }
        if let Some(model) = get("ANTHROPIC_MODEL") {
            self.anthropic_vision_model = model;
        }
        if let Some(model) = get("SHOTCRAFT_CODE_MODEL_OPENAI") {
            self.openai_code_model = model;
        }
        if let Some(model) = get("SHOTCRAFT_CODE_MODEL_ANTHROPIC") {
            self.anthropic_code_model = model;
        }
        Ok(())
    }

    /// API key of the selected provider.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        match self.provider {
            ProviderKind::OpenAi => self.openai_api_key.as_deref(),
            ProviderKind::Anthropic => self.anthropic_api_key.as_deref(),
        }
    }

    /// Vision model of the selected provider.
    #[must_use]
    pub fn vision_model(&self) -> &str {
        match self.provider {
            ProviderKind::OpenAi => &self.openai_vision_model,
            ProviderKind::Anthropic => &self.anthropic_vision_model,
        }
    }

    /// Code model of the selected provider.
    #[must_use]
    pub fn code_model(&self) -> &str {
        match self.provider {
            ProviderKind::OpenAi => &self.openai_code_model,
            ProviderKind::Anthropic => &self.anthropic_code_model,
        }
    }

    /// Largest accepted image in bytes.
    #[must_use]
    pub const fn max_image_bytes(&self) -> u64 {
        self.max_image_size_mb.saturating_mul(1024 * 1024)
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
