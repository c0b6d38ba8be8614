// dpack-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DpackError {
    // --- DOMAIN ERRORS (registry invariants, lookups) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, Rendering) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl From<std::io::Error> for DpackError {
    fn from(err: std::io::Error) -> Self {
        DpackError::Infrastructure(InfrastructureError::Io(err))
    }
}
