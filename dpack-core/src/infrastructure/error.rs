// dpack-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(dpack::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- PACKS / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(dpack::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid domain pack file '{path}': {source}")]
    #[diagnostic(
        code(dpack::infra::pack_file),
        help("A pack file holds exactly one domain pack document.")
    )]
    PackFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Embedded domain pack '{name}' is malformed: {source}")]
    #[diagnostic(code(dpack::infra::builtin_pack))]
    BuiltinPack {
        name: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Pack directory not found at '{0}'")]
    #[diagnostic(
        code(dpack::infra::pack_dir_missing),
        help("Check `pack-paths` in dpack.yaml or the --packs-dir flag.")
    )]
    PackDirNotFound(PathBuf),

    #[error("Directory walk failed: {0}")]
    #[diagnostic(code(dpack::infra::walk))]
    Walk(#[from] walkdir::Error),

    // --- CONFIG ---
    #[error("Configuration Error: {0}")]
    #[diagnostic(code(dpack::infra::config))]
    ConfigError(String),

    // --- REPORTING ---
    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(dpack::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(dpack::infra::template),
        help("Check the Jinja syntax of the evidence template.")
    )]
    TemplateError(#[from] minijinja::Error),
}
