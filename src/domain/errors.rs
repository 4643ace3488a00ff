// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Caller input broke an entity rule; nothing was mutated or persisted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Rejects empty and whitespace-only values for a required text field.
pub(crate) fn require_text(field: &'static str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidArgument(format!("{field} cannot be empty")));
    }
    Ok(value)
}
