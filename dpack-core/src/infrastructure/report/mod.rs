// dpack-core/src/infrastructure/report/mod.rs

pub mod markdown;

pub use markdown::EvidenceRenderer;
