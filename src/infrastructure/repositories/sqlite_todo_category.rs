use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::todo::{
    NewTodoCategory, TodoCategory, TodoCategoryId, TodoCategoryName, TodoCategoryRepository,
    TodoColor,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const TODO_CATEGORY_COLUMNS: &str = "id, name, color, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteTodoCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTodoCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TodoCategoryRow {
    id: i64,
    name: String,
    color: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TodoCategoryRow> for TodoCategory {
    type Error = DomainError;

    fn try_from(row: TodoCategoryRow) -> Result<Self, Self::Error> {
        Ok(TodoCategory {
            id: TodoCategoryId::new(row.id)?,
            name: TodoCategoryName::new(row.name)?,
            color: TodoColor::parse(row.color)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TodoCategoryRepository for SqliteTodoCategoryRepository {
    async fn insert(&self, category: NewTodoCategory) -> DomainResult<TodoCategory> {
        let NewTodoCategory {
            name,
            color,
            created_at,
        } = category;

        let row = sqlx::query_as::<_, TodoCategoryRow>(&format!(
            "INSERT INTO todo_categories (name, color, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING {TODO_CATEGORY_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(color.as_ref().map(TodoColor::as_str))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        TodoCategory::try_from(row)
    }

    async fn find_by_id(&self, id: TodoCategoryId) -> DomainResult<Option<TodoCategory>> {
        let row = sqlx::query_as::<_, TodoCategoryRow>(&format!(
            "SELECT {TODO_CATEGORY_COLUMNS} FROM todo_categories WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(TodoCategory::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<TodoCategory>> {
        let rows = sqlx::query_as::<_, TodoCategoryRow>(&format!(
            "SELECT {TODO_CATEGORY_COLUMNS} FROM todo_categories ORDER BY name ASC, id ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(TodoCategory::try_from).collect()
    }
}
