// src/application/commands/todos/catalog.rs
use super::TodoCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProjectDto, TodoCategoryDto},
        error::ApplicationResult,
    },
    domain::todo::{
        NewProject, NewTodoCategory, ProjectDescription, ProjectName, TodoCategoryName, TodoColor,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateTodoCategoryCommand {
    pub name: String,
    /// `#rgb` or `#rrggbb`.
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateProjectCommand {
    pub name: String,
    pub description: Option<String>,
}

impl TodoCommandService {
    pub async fn create_todo_category(
        &self,
        command: CreateTodoCategoryCommand,
    ) -> ApplicationResult<TodoCategoryDto> {
        let category = NewTodoCategory {
            name: TodoCategoryName::new(command.name)?,
            color: TodoColor::parse(command.color)?,
            created_at: self.clock.now(),
        };
        let created = self.categories.insert(category).await?;
        tracing::info!(todo_category_id = created.id.0, "todo category created");
        Ok(created.into())
    }

    pub async fn create_project(
        &self,
        actor: &AuthenticatedUser,
        command: CreateProjectCommand,
    ) -> ApplicationResult<ProjectDto> {
        let project = NewProject {
            owner_id: actor.id,
            name: ProjectName::new(command.name)?,
            description: ProjectDescription::parse(command.description)?,
            created_at: self.clock.now(),
        };
        let created = self.projects.insert(project).await?;
        tracing::info!(project_id = created.id.0, owner = actor.id.0, "project created");
        Ok(created.into())
    }
}
