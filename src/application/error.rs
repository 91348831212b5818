// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures raised by the article use cases. Lookup misses and store errors
/// arrive as [`DomainError`]; the other variants are decided here.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request fields that cannot be applied together or normalize to nothing.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A caller-chosen slug is already used by another record.
    #[error("slug conflict: {0}")]
    Conflict(String),

    /// A record that should have been persisted has no key.
    #[error("internal error: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
