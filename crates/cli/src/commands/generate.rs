//! The `image` and `figma` commands

use super::Command;
use crate::cli::OutputArgs;
use crate::errors::CliError;
use shotcraft_generator::{FigmaRequest, GeneratedProject, Generator, Settings, media_type_for_path};
use shotcraft_packaging::PackagedProject;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub archive: PathBuf,
    pub files: usize,
    pub sha256: String,
    pub checksum: Option<PathBuf>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote {}", self.archive.display())?;
        writeln!(f, "  files:  {}", self.files)?;
        write!(f, "  sha256: {}", self.sha256)?;
        if let Some(checksum) = &self.checksum {
            write!(f, "\n  checksum file: {}", checksum.display())?;
        }
        Ok(())
    }
}

/// Run a generation command and write its archive.
#[instrument(
    name = "execute_command",
    skip_all,
    fields(command = command.name(), correlation_id = %crate::tracing::correlation_id())
)]
pub async fn execute(command: Command, config: Option<&Path>) -> Result<Summary, CliError> {
    let settings = load_settings(config, command.output())?;

    let (project, output) = match command {
        Command::Image { file, output } => {
            let (image, media_type) = read_image(&file)?;
            let generator = Generator::from_settings(&settings)?;
            info!(file = %file.display(), media_type, "Generating from screenshot");
            (generator.from_image(&image, media_type).await?, output)
        }
        Command::Figma {
            url,
            node_id,
            token,
            output,
        } => {
            let mut request = FigmaRequest::new(url);
            if let Some(node_id) = node_id {
                request = request.with_node_id(node_id);
            }
            if let Some(token) = token {
                request = request.with_access_token(token);
            }
            let generator = Generator::from_settings(&settings)?;
            info!(url = %request.url, "Generating from Figma design");
            (generator.from_figma(&request).await?, output)
        }
    };

    let path = output_path(&output, &settings.project_name);
    write_outputs(&project, &path, output.checksum)
}

/// Settings from file and environment with command line overrides applied.
pub fn load_settings(config: Option<&Path>, output: &OutputArgs) -> Result<Settings, CliError> {
    let mut settings = Settings::load(config)?;
    if let Some(provider) = output.provider {
        settings.provider = provider;
    }
    if let Some(project_name) = &output.project_name {
        settings.project_name.clone_from(project_name);
    }
    debug!(provider = %settings.provider, project = %settings.project_name, "Resolved settings");
    Ok(settings)
}

/// Read a screenshot and infer its media type from the extension.
pub fn read_image(path: &Path) -> Result<(Vec<u8>, &'static str), CliError> {
    let media_type = media_type_for_path(path).ok_or_else(|| CliError::UnsupportedImage {
        path: path.to_path_buf(),
    })?;
    let image = std::fs::read(path).map_err(|source| CliError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((image, media_type))
}

/// `--output`, or `{project_name}.zip` in the working directory.
pub fn output_path(output: &OutputArgs, project_name: &str) -> PathBuf {
    output
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{project_name}.zip")))
}

/// Write the archive, and its checksum file when asked.
pub fn write_outputs(
    project: &GeneratedProject,
    path: &Path,
    checksum: bool,
) -> Result<Summary, CliError> {
    let archive: &PackagedProject = &project.archive;
    archive
        .write_to(path)
        .map_err(|e| CliError::output(path, e))?;

    let checksum = if checksum {
        Some(
            archive
                .write_checksum(path)
                .map_err(|e| CliError::output(path, e))?,
        )
    } else {
        None
    };

    Ok(Summary {
        archive: path.to_path_buf(),
        files: archive.entry_count,
        sha256: archive.sha256.clone(),
        checksum,
    })
}
