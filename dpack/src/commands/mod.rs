// dpack/src/commands/mod.rs

pub mod list;
pub mod show;
pub mod validate;

use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::SourceArgs;
use dpack_core::PackRegistry;
use dpack_core::application::{RegistrySources, load_registry};
use dpack_core::infrastructure::config::{ProjectConfig, load_project_config};

/// Everything a command needs: resolved config plus the assembled registry.
pub struct Workspace {
    pub project_dir: PathBuf,
    pub config: ProjectConfig,
    pub registry: PackRegistry,
}

pub fn open_workspace(source: SourceArgs) -> anyhow::Result<Workspace> {
    let config = load_project_config(&source.project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            source.project_dir
        )
    })?;

    // CLI flags win over dpack.yaml.
    let mut sources = RegistrySources::from_config(&source.project_dir, &config);
    if source.no_builtin {
        sources.builtin = false;
    }
    sources.pack_dirs.extend(source.packs_dirs);
    debug!(?sources, "Registry sources resolved");

    let registry =
        load_registry(&sources).context("Failed to assemble the domain pack registry")?;

    Ok(Workspace {
        project_dir: source.project_dir,
        config,
        registry,
    })
}
