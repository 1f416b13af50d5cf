// clusterlink-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ClusterlinkError {
    // --- DOMAIN ERRORS (endpoint, missing parameters) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, HTTP, parameter store, settings) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for ClusterlinkError {
    fn from(err: std::io::Error) -> Self {
        ClusterlinkError::Infrastructure(InfrastructureError::Io(err))
    }
}
