// dpack-core/src/infrastructure/config/mod.rs

pub mod project;

pub use project::{CONFIG_FILE, DEFAULT_EVIDENCE_PATH, ProjectConfig, load_project_config};
