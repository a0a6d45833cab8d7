mod cli;
mod commands;
mod errors;
mod tracing;

use crate::cli::parse;
use crate::commands::Command;
use crate::commands::generate::{Summary, execute};
use crate::tracing::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = parse();

    init_tracing(TracingConfig {
        format: cli.tracing_format(),
        level: cli.level.into(),
        ..Default::default()
    })?;

    let command: Command = cli.command.into();
    let summary = execute(command, cli.config.as_deref()).await?;
    print_summary(&summary);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_summary(summary: &Summary) {
    println!("{summary}");
}
