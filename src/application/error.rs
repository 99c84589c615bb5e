// src/application/error.rs
use crate::domain::{errors::DomainError, slug::SlugError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("forbidden: {0}")]
    Forbidden(String),
}

/// Coarse error classes used to pick the client-facing code and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Forbidden,
    Internal,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::Internal => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Domain(inner) => match inner {
                DomainError::Validation(_) | DomainError::Slug(SlugError::InvalidInput) => {
                    ErrorKind::Validation
                }
                DomainError::Conflict(_) | DomainError::SlugTaken(_) => ErrorKind::Conflict,
                DomainError::NotFound(_) => ErrorKind::NotFound,
                DomainError::Persistence(_) | DomainError::Slug(SlugError::Exhausted { .. }) => {
                    ErrorKind::Internal
                }
            },
            ApplicationError::Validation(_) => ErrorKind::Validation,
            ApplicationError::NotFound(_) => ErrorKind::NotFound,
            ApplicationError::Conflict(_) => ErrorKind::Conflict,
            ApplicationError::Forbidden(_) => ErrorKind::Forbidden,
        }
    }
}
