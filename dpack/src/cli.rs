// dpack/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dpack")]
#[command(about = "Domain pack registry & structural validator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the registry gets its packs from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Project directory (holds the optional dpack.yaml)
    #[arg(long, env = "DPACK_PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Additional directory of pack YAML files (repeatable)
    #[arg(long = "packs-dir")]
    pub packs_dirs: Vec<PathBuf>,

    /// Do not register the built-in packs
    #[arg(long, default_value = "false")]
    pub no_builtin: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ✅ Validates every registered pack and writes evidence artifacts
    Validate {
        #[command(flatten)]
        source: SourceArgs,

        /// Evidence output directory (overrides `evidence-path`)
        #[arg(long)]
        evidence_dir: Option<PathBuf>,

        /// Skip writing the JSON / Markdown evidence
        #[arg(long, default_value = "false")]
        no_evidence: bool,
    },

    /// 📦 Lists the registered domain packs
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// 🔍 Shows the datasets, glossary, policies and questions of one pack
    Show {
        /// Exact domain name (ex: "Credit Risk")
        domain: String,

        #[command(flatten)]
        source: SourceArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_validate_defaults() -> Result<()> {
        let args = Cli::parse_from(["dpack", "validate"]);
        match args.command {
            Commands::Validate {
                source,
                evidence_dir,
                no_evidence,
            } => {
                assert!(source.packs_dirs.is_empty());
                assert!(!source.no_builtin);
                assert_eq!(evidence_dir, None);
                assert!(!no_evidence);
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_repeated_packs_dirs() -> Result<()> {
        let args = Cli::parse_from([
            "dpack",
            "validate",
            "--packs-dir",
            "packs",
            "--packs-dir",
            "vendor",
            "--no-builtin",
            "--evidence-dir",
            "/tmp/out",
        ]);
        match args.command {
            Commands::Validate {
                source,
                evidence_dir,
                ..
            } => {
                assert_eq!(
                    source.packs_dirs,
                    [PathBuf::from("packs"), PathBuf::from("vendor")]
                );
                assert!(source.no_builtin);
                assert_eq!(evidence_dir, Some(PathBuf::from("/tmp/out")));
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_show() -> Result<()> {
        let args = Cli::parse_from(["dpack", "show", "Credit Risk", "--project-dir", "/tmp"]);
        match args.command {
            Commands::Show { domain, source } => {
                assert_eq!(domain, "Credit Risk");
                assert_eq!(source.project_dir.to_string_lossy(), "/tmp");
                Ok(())
            }
            _ => bail!("Expected Show command"),
        }
    }
}
