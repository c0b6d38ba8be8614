// dpack-core/src/infrastructure/config/project.rs
//
// Optional `dpack.yaml` at the project root, layered with environment
// overrides. Without a file every setting falls back to its default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_FILE: &str = "dpack.yaml";
pub const DEFAULT_EVIDENCE_PATH: &str = "evidence/domain_pack_smoke_run";

const ENV_EVIDENCE_PATH: &str = "DPACK_EVIDENCE_PATH";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    /// Where evidence artifacts are written, relative to the project dir.
    #[serde(rename = "evidence-path", default = "default_evidence_path")]
    pub evidence_path: String,

    /// Extra directories scanned for `*.yaml` / `*.yml` pack files.
    #[serde(rename = "pack-paths", default)]
    pub pack_paths: Vec<String>,

    /// Whether the embedded packs are registered.
    #[serde(rename = "builtin-packs", default = "default_builtin_packs")]
    pub builtin_packs: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            evidence_path: default_evidence_path(),
            pack_paths: Vec::new(),
            builtin_packs: default_builtin_packs(),
        }
    }
}

fn default_evidence_path() -> String {
    DEFAULT_EVIDENCE_PATH.to_string()
}

fn default_builtin_packs() -> bool {
    true
}

#[instrument]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    let config_path = project_dir.join(CONFIG_FILE);

    let mut config = if config_path.exists() {
        info!(path = ?config_path, "Loading project configuration");
        let content = fs::read_to_string(&config_path)?;
        serde_yaml::from_str(&content)?
    } else {
        debug!(path = ?config_path, "No project configuration, using defaults");
        ProjectConfig::default()
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    if config.evidence_path.trim().is_empty() {
        return Err(InfrastructureError::ConfigError(
            "`evidence-path` cannot be empty".to_string(),
        ));
    }

    Ok(config)
}

fn apply_env_overrides<F>(config: &mut ProjectConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_EVIDENCE_PATH) {
        info!(old = ?config.evidence_path, new = ?val, "Overriding evidence path via ENV");
        config.evidence_path = val;
    }
}
