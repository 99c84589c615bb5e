use crate::domain::todo::category::TodoCategoryId;
use crate::domain::todo::project::ProjectId;
use crate::domain::todo::value_objects::{
    TodoDescription, TodoId, TodoPriority, TodoStatus, TodoTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Todo {
    pub id: TodoId,
    pub owner_id: UserId,
    pub title: TodoTitle,
    pub description: Option<TodoDescription>,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub category_id: Option<TodoCategoryId>,
    pub project_id: Option<ProjectId>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Moves to `status`, stamping `completed_at` on entering `Done` and
    /// clearing it on leaving.
    pub fn set_status(&mut self, status: TodoStatus, now: DateTime<Utc>) {
        let was_done = self.status == TodoStatus::Done;
        let is_done = status == TodoStatus::Done;
        if is_done && !was_done {
            self.completed_at = Some(now);
        } else if !is_done && was_done {
            self.completed_at = None;
        }
        self.status = status;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub owner_id: UserId,
    pub title: TodoTitle,
    pub description: Option<TodoDescription>,
    pub priority: TodoPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub category_id: Option<TodoCategoryId>,
    pub project_id: Option<ProjectId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TodoUpdate {
    pub id: TodoId,
    pub title: Option<TodoTitle>,
    pub description: Option<Option<TodoDescription>>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub category_id: Option<Option<TodoCategoryId>>,
    pub project_id: Option<Option<ProjectId>>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
    pub updated_at: DateTime<Utc>,
}

impl TodoUpdate {
    pub fn new(id: TodoId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            description: None,
            status: None,
            priority: None,
            due_date: None,
            category_id: None,
            project_id: None,
            completed_at: None,
            updated_at,
        }
    }
}
