// dpack/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug dpack validate ... to see the details.
    // Logs go to stderr; stdout is the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            source,
            evidence_dir,
            no_evidence,
        } => commands::validate::execute(source, evidence_dir, no_evidence),
        Commands::List { source } => commands::list::execute(source),
        Commands::Show { domain, source } => commands::show::execute(source, domain),
    }
}
