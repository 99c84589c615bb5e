// src/application/commands/todos/commands.rs
use super::TodoCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TodoDto},
        error::ApplicationResult,
    },
    domain::{
        errors::DomainResult,
        todo::{
            NewTodo, TodoDescription, TodoPriority, TodoStatus, TodoTitle, TodoUpdate,
            parse_due_date,
        },
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: Option<String>,
    /// `HIGH`, `MEDIUM` or `LOW`; defaults to `MEDIUM`.
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub category_id: Option<i64>,
    /// Must be one of the actor's projects.
    pub project_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTodoCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Option<String>>,
    pub category_id: Option<Option<i64>>,
    pub project_id: Option<Option<i64>>,
}

pub struct DeleteTodoCommand {
    pub id: i64,
}

fn parse_optional_due_date(value: Option<String>) -> DomainResult<Option<DateTime<Utc>>> {
    match value {
        Some(raw) if !raw.trim().is_empty() => parse_due_date(&raw).map(Some),
        _ => Ok(None),
    }
}

impl TodoCommandService {
    pub async fn create_todo(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTodoCommand,
    ) -> ApplicationResult<TodoDto> {
        let category_id = self.ensure_category(command.category_id).await?;
        let project_id = self.ensure_project(actor, command.project_id).await?;
        let new_todo = NewTodo {
            owner_id: actor.id,
            title: TodoTitle::new(command.title)?,
            description: TodoDescription::parse(command.description)?,
            priority: command
                .priority
                .as_deref()
                .map(str::parse::<TodoPriority>)
                .transpose()?
                .unwrap_or_default(),
            due_date: parse_optional_due_date(command.due_date)?,
            category_id,
            project_id,
            created_at: self.clock.now(),
        };

        let created = self.repo.insert(new_todo).await?;
        tracing::info!(todo_id = created.id.0, owner = actor.id.0, "todo created");
        Ok(created.into())
    }

    pub async fn update_todo(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTodoCommand,
    ) -> ApplicationResult<TodoDto> {
        let mut todo = self.load_owned(actor, command.id).await?;
        let now = self.clock.now();
        let mut update = TodoUpdate::new(todo.id, now);

        if let Some(title) = command.title {
            update.title = Some(TodoTitle::new(title)?);
        }
        if let Some(description) = command.description {
            update.description = Some(TodoDescription::parse(description)?);
        }
        if let Some(priority) = command.priority {
            update.priority = Some(priority.parse::<TodoPriority>()?);
        }
        if let Some(due_date) = command.due_date {
            update.due_date = Some(parse_optional_due_date(due_date)?);
        }
        if let Some(category_id) = command.category_id {
            update.category_id = Some(self.ensure_category(category_id).await?);
        }
        if let Some(project_id) = command.project_id {
            update.project_id = Some(self.ensure_project(actor, project_id).await?);
        }
        if let Some(status) = command.status {
            let status = status.parse::<TodoStatus>()?;
            let before = todo.completed_at;
            todo.set_status(status, now);
            update.status = Some(status);
            if todo.completed_at != before {
                update.completed_at = Some(todo.completed_at);
            }
        }

        let updated = self.repo.update(update).await?;
        tracing::info!(todo_id = updated.id.0, status = %updated.status, "todo updated");
        Ok(updated.into())
    }

    pub async fn delete_todo(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteTodoCommand,
    ) -> ApplicationResult<()> {
        let todo = self.load_owned(actor, command.id).await?;
        self.repo.delete(todo.id).await?;
        tracing::info!(todo_id = todo.id.0, owner = actor.id.0, "todo deleted");
        Ok(())
    }
}
