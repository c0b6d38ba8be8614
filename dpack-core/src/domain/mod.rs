// dpack-core/src/domain/mod.rs

pub mod error;
pub mod pack;
pub mod registry;
pub mod validation;

pub use error::DomainError;
