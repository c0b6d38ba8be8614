// dpack-core/src/infrastructure/packs/loader.rs

use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::domain::pack::DomainPack;
use crate::infrastructure::error::InfrastructureError;

pub fn parse_pack(source: &str) -> Result<DomainPack, serde_yaml::Error> {
    serde_yaml::from_str(source)
}

pub fn load_pack_file(path: &Path) -> Result<DomainPack, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    parse_pack(&content).map_err(|source| InfrastructureError::PackFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every `*.yaml` / `*.yml` file below `dir`, recursively, sorted by
/// file name so the resulting order is reproducible.
#[instrument]
pub fn load_pack_dir(dir: &Path) -> Result<Vec<DomainPack>, InfrastructureError> {
    if !dir.is_dir() {
        return Err(InfrastructureError::PackDirNotFound(dir.to_path_buf()));
    }

    let mut packs = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        if !entry.file_type().is_file() || !is_yaml {
            continue;
        }

        debug!(path = ?path, "Loading domain pack file");
        packs.push(load_pack_file(path)?);
    }

    info!(count = packs.len(), "Domain packs loaded from directory");
    Ok(packs)
}
