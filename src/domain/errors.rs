// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// No record matched a lookup; `key` is the value that was searched for.
    #[error("no results for {what} `{key}`")]
    NotFound { what: &'static str, key: String },
    #[error("invalid record configuration: {0}")]
    Configuration(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn not_found(what: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            what,
            key: key.into(),
        }
    }

    pub fn unknown_field(table: &str, field: &str) -> Self {
        Self::Configuration(format!("`{table}` has no field named `{field}`"))
    }

    /// The lookup key carried by a `NotFound` error.
    pub fn lookup_key(&self) -> Option<&str> {
        match self {
            Self::NotFound { key, .. } => Some(key),
            _ => None,
        }
    }
}
