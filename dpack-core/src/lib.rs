// dpack-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]
// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain (business core)
// Pack model, registry, validation rules.
// Depends on nothing else (neither infra nor app).
pub mod domain;

// 2. Infrastructure (Adapters)
// YAML pack loading, embedded packs, project config, report rendering.
// Depends on the Domain.
pub mod infrastructure;

// 3. Application (Use Cases)
// Registry assembly, validation runs, evidence generation.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use domain::pack::DomainPack;
pub use domain::registry::PackRegistry;
pub use domain::validation::{ValidationResult, validate_pack};
pub use error::DpackError;
