use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::required_text;
use chrono::{DateTime, Utc};

pub const CATEGORY_NAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoCategoryId(pub i64);

impl TodoCategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("todo category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TodoCategoryId> for i64 {
    fn from(value: TodoCategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoCategoryName(String);

impl TodoCategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text(value.into(), "todo category name", Some(CATEGORY_NAME_MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Display colour in `#rgb` or `#rrggbb` form, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoColor(String);

impl TodoColor {
    pub fn parse(value: Option<String>) -> DomainResult<Option<Self>> {
        let Some(raw) = value else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let digits = raw.strip_prefix('#').unwrap_or_default();
        let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(DomainError::Validation(format!(
                "color '{raw}' must look like #rrggbb"
            )));
        }
        Ok(Some(Self(raw.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Shared label for todos, visible to every user.
#[derive(Debug, Clone)]
pub struct TodoCategory {
    pub id: TodoCategoryId,
    pub name: TodoCategoryName,
    pub color: Option<TodoColor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTodoCategory {
    pub name: TodoCategoryName,
    pub color: Option<TodoColor>,
    pub created_at: DateTime<Utc>,
}
