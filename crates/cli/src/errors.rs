//! CLI error types rendered through miette

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the CLI layer itself; library errors pass through
/// [`CliError::Generation`] with their own diagnostics.
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Failed to read image {}", path.display())]
    #[diagnostic(
        code(shotcraft::cli::image_read),
        help("Check that the file exists and is readable")
    )]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported image file: {}", path.display())]
    #[diagnostic(
        code(shotcraft::cli::unsupported_image),
        help("Supported formats: png, jpg, jpeg, gif, webp, bmp")
    )]
    UnsupportedImage { path: PathBuf },

    #[error("Failed to write {}", path.display())]
    #[diagnostic(
        code(shotcraft::cli::output),
        help("Check that the output directory is writable")
    )]
    Output {
        path: PathBuf,
        #[source]
        source: shotcraft_core::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generation(#[from] shotcraft_core::Error),
}

impl CliError {
    pub fn output(path: impl Into<PathBuf>, source: shotcraft_core::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}
