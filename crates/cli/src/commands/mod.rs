pub mod generate;

use crate::cli::OutputArgs;
use std::path::PathBuf;

/// A parsed command, detached from its clap representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Image {
        file: PathBuf,
        output: OutputArgs,
    },
    Figma {
        url: String,
        node_id: Option<String>,
        token: Option<String>,
        output: OutputArgs,
    },
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Figma { .. } => "figma",
        }
    }

    pub const fn output(&self) -> &OutputArgs {
        match self {
            Self::Image { output, .. } | Self::Figma { output, .. } => output,
        }
    }
}
