//! Error types shared by every shotcraft crate.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for shotcraft operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a project.
///
/// Assembling a project never fails; malformed descriptors and unknown
/// routes are absorbed there. Only packaging and the external collaborators
/// around it produce errors.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The archive could not be written or failed its integrity check.
    #[error("Packaging failed: {message}")]
    #[diagnostic(
        code(shotcraft::packaging::failed),
        help("Generation failed, please retry")
    )]
    Packaging {
        /// The error message
        message: String,
    },

    /// A request carried input that cannot be processed.
    #[error("Invalid input: {message}")]
    #[diagnostic(code(shotcraft::input::invalid))]
    InvalidInput {
        /// The error message
        message: String,
    },

    /// An upstream model or design provider failed.
    #[error("{provider} provider error: {message}")]
    #[diagnostic(
        code(shotcraft::provider::failed),
        help("Check the API key and model configured for this provider")
    )]
    Provider {
        /// The provider that failed
        provider: String,
        /// The error message
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(shotcraft::config::invalid),
        help("Check shotcraft.toml and the SHOTCRAFT_* environment variables")
    )]
    Configuration {
        /// The error message
        message: String,
    },

    /// Wrapped I/O error.
    #[error("I/O error: {0}")]
    #[diagnostic(code(shotcraft::io))]
    Io(#[from] std::io::Error),

    /// Wrapped JSON error.
    #[error("JSON error: {0}")]
    #[diagnostic(code(shotcraft::json))]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new packaging error.
    #[must_use]
    pub fn packaging(message: impl Into<String>) -> Self {
        Self::Packaging {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new provider error.
    #[must_use]
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
