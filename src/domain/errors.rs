// src/domain/errors.rs
use crate::domain::slug::SlugError;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// Storage rejected a write because another row already owns the slug.
    #[error("slug already taken: {0}")]
    SlugTaken(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error(transparent)]
    Slug(#[from] SlugError),
}

impl From<crate::domain::slug::SlugResolveError<DomainError>> for DomainError {
    fn from(err: crate::domain::slug::SlugResolveError<DomainError>) -> Self {
        use crate::domain::slug::SlugResolveError;
        match err {
            SlugResolveError::Slug(inner) => DomainError::Slug(inner),
            SlugResolveError::Oracle(inner) => inner,
        }
    }
}
