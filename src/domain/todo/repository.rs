use crate::domain::errors::DomainResult;
use crate::domain::todo::category::{NewTodoCategory, TodoCategory, TodoCategoryId};
use crate::domain::todo::entity::{NewTodo, Todo, TodoUpdate};
use crate::domain::todo::project::{NewProject, Project, ProjectId};
use crate::domain::todo::value_objects::{TodoId, TodoPriority, TodoStatus};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct TodoListFilter {
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub category_id: Option<TodoCategoryId>,
    pub project_id: Option<ProjectId>,
}

/// Todos are always addressed through their owner.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn insert(&self, todo: NewTodo) -> DomainResult<Todo>;
    async fn update(&self, update: TodoUpdate) -> DomainResult<Todo>;
    async fn delete(&self, id: TodoId) -> DomainResult<()>;
    async fn find_owned(&self, id: TodoId, owner: UserId) -> DomainResult<Option<Todo>>;
    /// Highest priority first, then earliest due date (undated last), then newest.
    async fn list_owned(&self, owner: UserId, filter: TodoListFilter) -> DomainResult<Vec<Todo>>;
}

#[async_trait]
pub trait TodoCategoryRepository: Send + Sync {
    /// A duplicate name is a [`DomainError::Conflict`](crate::domain::errors::DomainError::Conflict).
    async fn insert(&self, category: NewTodoCategory) -> DomainResult<TodoCategory>;
    async fn find_by_id(&self, id: TodoCategoryId) -> DomainResult<Option<TodoCategory>>;
    /// Ordered by name.
    async fn list(&self) -> DomainResult<Vec<TodoCategory>>;
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert(&self, project: NewProject) -> DomainResult<Project>;
    async fn find_owned(&self, id: ProjectId, owner: UserId) -> DomainResult<Option<Project>>;
    /// Ordered by name.
    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Project>>;
}
