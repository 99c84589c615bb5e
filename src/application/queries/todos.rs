// src/application/queries/todos.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ProjectDto, TodoCategoryDto, TodoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::todo::{
        ProjectId, ProjectRepository, TodoCategoryId, TodoCategoryRepository, TodoId,
        TodoListFilter, TodoPriority, TodoRepository, TodoStatus,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListTodosQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category_id: Option<i64>,
    pub project_id: Option<i64>,
}

pub struct TodoQueryService {
    repo: Arc<dyn TodoRepository>,
    categories: Arc<dyn TodoCategoryRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl TodoQueryService {
    pub fn new(
        repo: Arc<dyn TodoRepository>,
        categories: Arc<dyn TodoCategoryRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            repo,
            categories,
            projects,
        }
    }

    /// The actor's todos, most urgent first.
    pub async fn list_todos(
        &self,
        actor: &AuthenticatedUser,
        query: ListTodosQuery,
    ) -> ApplicationResult<Vec<TodoDto>> {
        let filter = TodoListFilter {
            status: query
                .status
                .as_deref()
                .map(str::parse::<TodoStatus>)
                .transpose()?,
            priority: query
                .priority
                .as_deref()
                .map(str::parse::<TodoPriority>)
                .transpose()?,
            category_id: query.category_id.map(TodoCategoryId::new).transpose()?,
            project_id: query.project_id.map(ProjectId::new).transpose()?,
        };
        let todos = self.repo.list_owned(actor.id, filter).await?;
        Ok(todos.into_iter().map(Into::into).collect())
    }

    pub async fn get_todo(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<TodoDto> {
        let id = TodoId::new(id)?;
        self.repo
            .find_owned(id, actor.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("todo not found"))
    }

    pub async fn list_todo_categories(&self) -> ApplicationResult<Vec<TodoCategoryDto>> {
        let categories = self.categories.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn list_projects(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ProjectDto>> {
        let projects = self.projects.list_owned(actor.id).await?;
        Ok(projects.into_iter().map(Into::into).collect())
    }
}
