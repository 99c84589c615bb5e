use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::domain::validation::{max_length, required_text};
use chrono::{DateTime, Utc};

pub const PROJECT_NAME_MAX_CHARS: usize = 100;
pub const PROJECT_DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(pub i64);

impl ProjectId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("project id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProjectId> for i64 {
    fn from(value: ProjectId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text(value.into(), "project name", Some(PROJECT_NAME_MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescription(String);

impl ProjectDescription {
    pub fn parse(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(text) if !text.is_empty() => {
                let text = max_length(text, "description", Some(PROJECT_DESCRIPTION_MAX_CHARS))?;
                Ok(Some(Self(text)))
            }
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Groups one user's todos. Projects are private to their owner.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub owner_id: UserId,
    pub name: ProjectName,
    pub description: Option<ProjectDescription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub owner_id: UserId,
    pub name: ProjectName,
    pub description: Option<ProjectDescription>,
    pub created_at: DateTime<Utc>,
}
