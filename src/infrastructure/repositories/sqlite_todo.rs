use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::todo::{
    NewTodo, ProjectId, Todo, TodoCategoryId, TodoDescription, TodoId, TodoListFilter,
    TodoRepository, TodoTitle, TodoUpdate,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const TODO_COLUMNS: &str = "id, owner_id, title, description, status, priority, due_date, \
     category_id, project_id, completed_at, created_at, updated_at";

const TODO_ORDER: &str = " ORDER BY CASE priority WHEN 'HIGH' THEN 0 WHEN 'MEDIUM' THEN 1 ELSE 2 END, \
     due_date IS NULL, due_date ASC, created_at DESC, id DESC";

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTodoRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    owner_id: i64,
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    due_date: Option<DateTime<Utc>>,
    category_id: Option<i64>,
    project_id: Option<i64>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = DomainError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(Todo {
            id: TodoId::new(row.id)?,
            owner_id: UserId::new(row.owner_id)?,
            title: TodoTitle::new(row.title)?,
            description: TodoDescription::parse(row.description)?,
            status: row.status.parse()?,
            priority: row.priority.parse()?,
            due_date: row.due_date,
            category_id: row.category_id.map(TodoCategoryId::new).transpose()?,
            project_id: row.project_id.map(ProjectId::new).transpose()?,
            completed_at: row.completed_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn insert(&self, todo: NewTodo) -> DomainResult<Todo> {
        let NewTodo {
            owner_id,
            title,
            description,
            priority,
            due_date,
            category_id,
            project_id,
            created_at,
        } = todo;

        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "INSERT INTO todos (owner_id, title, description, priority, due_date, category_id, \
             project_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {TODO_COLUMNS}"
        ))
        .bind(i64::from(owner_id))
        .bind(title.as_str())
        .bind(description.as_ref().map(TodoDescription::as_str))
        .bind(priority.as_str())
        .bind(due_date)
        .bind(category_id.map(i64::from))
        .bind(project_id.map(i64::from))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Todo::try_from(row)
    }

    async fn update(&self, update: TodoUpdate) -> DomainResult<Todo> {
        let TodoUpdate {
            id,
            title,
            description,
            status,
            priority,
            due_date,
            category_id,
            project_id,
            completed_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE todos SET ");
        let mut set = builder.separated(", ");
        if let Some(title) = title {
            set.push("title = ").push_bind_unseparated(title.into_inner());
        }
        if let Some(description) = description {
            set.push("description = ")
                .push_bind_unseparated(description.map(TodoDescription::into_inner));
        }
        if let Some(status) = status {
            set.push("status = ").push_bind_unseparated(status.as_str());
        }
        if let Some(priority) = priority {
            set.push("priority = ").push_bind_unseparated(priority.as_str());
        }
        if let Some(due_date) = due_date {
            set.push("due_date = ").push_bind_unseparated(due_date);
        }
        if let Some(category_id) = category_id {
            set.push("category_id = ")
                .push_bind_unseparated(category_id.map(i64::from));
        }
        if let Some(project_id) = project_id {
            set.push("project_id = ")
                .push_bind_unseparated(project_id.map(i64::from));
        }
        if let Some(completed_at) = completed_at {
            set.push("completed_at = ").push_bind_unseparated(completed_at);
        }
        set.push("updated_at = ").push_bind_unseparated(updated_at);
        builder
            .push(" WHERE id = ")
            .push_bind(i64::from(id))
            .push(format!(" RETURNING {TODO_COLUMNS}"));

        let row = builder
            .build_query_as::<TodoRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("todo not found".into()))?;

        Todo::try_from(row)
    }

    async fn delete(&self, id: TodoId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("todo not found".into()));
        }
        Ok(())
    }

    async fn find_owned(&self, id: TodoId, owner: UserId) -> DomainResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE id = ? AND owner_id = ?"
        ))
        .bind(i64::from(id))
        .bind(i64::from(owner))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Todo::try_from).transpose()
    }

    async fn list_owned(&self, owner: UserId, filter: TodoListFilter) -> DomainResult<Vec<Todo>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {TODO_COLUMNS} FROM todos WHERE owner_id = "));
        builder.push_bind(i64::from(owner));
        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(priority) = filter.priority {
            builder.push(" AND priority = ").push_bind(priority.as_str());
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ").push_bind(i64::from(category_id));
        }
        if let Some(project_id) = filter.project_id {
            builder.push(" AND project_id = ").push_bind(i64::from(project_id));
        }
        builder.push(TODO_ORDER);

        let rows = builder
            .build_query_as::<TodoRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Todo::try_from).collect()
    }
}
