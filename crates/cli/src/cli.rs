use crate::commands::Command;
use crate::tracing::{LogLevel, TracingFormat};
use clap::{Args, Parser, Subcommand};
use shotcraft_generator::ProviderKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shotcraft")]
#[command(about = "Generate Angular projects from UI screenshots and Figma designs")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: TracingFormat,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,

    #[arg(
        short = 'c',
        long,
        global = true,
        help = "Settings file (defaults to ./shotcraft.toml when present)"
    )]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Log format after applying `--json`.
    pub const fn tracing_format(&self) -> TracingFormat {
        if self.json {
            TracingFormat::Json
        } else {
            self.log_format
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Generate a project from a UI screenshot")]
    Image {
        #[arg(help = "Screenshot file (png, jpg, gif, webp or bmp)")]
        file: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    #[command(about = "Generate a project from a Figma design")]
    Figma {
        #[arg(long, help = "Figma file URL")]
        url: String,
        #[arg(long, help = "Generate from a single node of the file")]
        node_id: Option<String>,
        #[arg(long, help = "Figma access token (overrides FIGMA_ACCESS_TOKEN)")]
        token: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Options shared by every generation command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long,
        help = "Archive path (defaults to <project-name>.zip)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Top-level folder name inside the archive")]
    pub project_name: Option<String>,

    #[arg(long, help = "Model provider (openai, anthropic)")]
    pub provider: Option<ProviderKind>,

    #[arg(long, help = "Also write a <archive>.sha256 checksum file")]
    pub checksum: bool,
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Image { file, output } => Self::Image { file, output },
            Commands::Figma {
                url,
                node_id,
                token,
                output,
            } => Self::Figma {
                url,
                node_id,
                token,
                output,
            },
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
