// dpack-core/src/application/registry.rs
//
// USE CASE: assemble the read-only registry once at startup.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::registry::PackRegistry;
use crate::error::DpackError;
use crate::infrastructure::config::ProjectConfig;
use crate::infrastructure::packs::{builtin_packs, load_pack_dir};

/// Where packs come from. Built-in packs are registered first, then each
/// directory in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrySources {
    pub builtin: bool,
    pub pack_dirs: Vec<PathBuf>,
}

impl Default for RegistrySources {
    fn default() -> Self {
        Self {
            builtin: true,
            pack_dirs: Vec::new(),
        }
    }
}

impl RegistrySources {
    /// Resolves the configured pack paths against the project directory.
    pub fn from_config(project_dir: &Path, config: &ProjectConfig) -> Self {
        Self {
            builtin: config.builtin_packs,
            pack_dirs: config
                .pack_paths
                .iter()
                .map(|p| project_dir.join(p))
                .collect(),
        }
    }
}

#[instrument(skip(sources), fields(builtin = sources.builtin, dirs = sources.pack_dirs.len()))]
pub fn load_registry(sources: &RegistrySources) -> Result<PackRegistry, DpackError> {
    let mut packs = Vec::new();

    if sources.builtin {
        packs.extend(builtin_packs()?);
    }

    for dir in &sources.pack_dirs {
        packs.extend(load_pack_dir(dir)?);
    }

    let registry = PackRegistry::new(packs)?;
    info!(packs = registry.len(), "Domain pack registry ready");
    Ok(registry)
}
