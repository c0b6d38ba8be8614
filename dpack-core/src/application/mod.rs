// dpack-core/src/application/mod.rs

pub mod check;
pub mod evidence;
pub mod registry;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use dpack_core::application::{load_registry, validate_registry, write_evidence};`
// without knowing the internal file layout.

pub use check::{PackOutcome, ValidationRun, validate_registry};
pub use evidence::{EvidencePaths, EvidenceReport, build_report, write_evidence};
pub use registry::{RegistrySources, load_registry};
