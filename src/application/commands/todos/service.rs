// src/application/commands/todos/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::todo::{
        ProjectId, ProjectRepository, Todo, TodoCategoryId, TodoCategoryRepository, TodoId,
        TodoRepository,
    },
};

pub struct TodoCommandService {
    pub(super) repo: Arc<dyn TodoRepository>,
    pub(super) categories: Arc<dyn TodoCategoryRepository>,
    pub(super) projects: Arc<dyn ProjectRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TodoCommandService {
    pub fn new(
        repo: Arc<dyn TodoRepository>,
        categories: Arc<dyn TodoCategoryRepository>,
        projects: Arc<dyn ProjectRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            categories,
            projects,
            clock,
        }
    }

    /// Someone else's todo is indistinguishable from a missing one.
    pub(super) async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<Todo> {
        let id = TodoId::new(id)?;
        self.repo
            .find_owned(id, actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("todo not found"))
    }

    pub(super) async fn ensure_category(
        &self,
        id: Option<i64>,
    ) -> ApplicationResult<Option<TodoCategoryId>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let id = TodoCategoryId::new(id)?;
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::validation("todo category does not exist"));
        }
        Ok(Some(id))
    }

    /// Only the actor's own projects can be referenced.
    pub(super) async fn ensure_project(
        &self,
        actor: &AuthenticatedUser,
        id: Option<i64>,
    ) -> ApplicationResult<Option<ProjectId>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let id = ProjectId::new(id)?;
        if self.projects.find_owned(id, actor.id).await?.is_none() {
            return Err(ApplicationError::validation("project does not exist"));
        }
        Ok(Some(id))
    }
}
