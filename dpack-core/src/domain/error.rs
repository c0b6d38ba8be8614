// dpack-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Domain '{0}' is registered more than once")]
    #[diagnostic(
        code(dpack::domain::duplicate_domain),
        help("Each domain pack must declare a unique `domain` name.")
    )]
    DuplicateDomain(String),

    #[error("Domain pack '{0}' not found")]
    #[diagnostic(
        code(dpack::domain::pack_not_found),
        help("Run `dpack list` to see the registered domains (lookup is case-sensitive).")
    )]
    PackNotFound(String),
}
