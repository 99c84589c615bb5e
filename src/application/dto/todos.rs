use crate::domain::todo::{Project, Todo, TodoCategory, TodoPriority, TodoStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    #[serde(default, with = "serde_time::option")]
    pub due_date: Option<DateTime<Utc>>,
    pub category_id: Option<i64>,
    pub project_id: Option<i64>,
    #[serde(default, with = "serde_time::option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.into(),
            title: todo.title.into_inner(),
            description: todo.description.map(|d| d.into_inner()),
            status: todo.status,
            priority: todo.priority,
            due_date: todo.due_date,
            category_id: todo.category_id.map(i64::from),
            project_id: todo.project_id.map(i64::from),
            completed_at: todo.completed_at,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoCategoryDto {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<TodoCategory> for TodoCategoryDto {
    fn from(category: TodoCategory) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            color: category.color.map(|c| c.into_inner()),
            created_at: category.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.into(),
            name: project.name.into_inner(),
            description: project.description.map(|d| d.into_inner()),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
