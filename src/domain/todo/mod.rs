pub mod category;
pub mod entity;
pub mod project;
pub mod repository;
pub mod value_objects;

pub use category::{NewTodoCategory, TodoCategory, TodoCategoryId, TodoCategoryName, TodoColor};
pub use entity::{NewTodo, Todo, TodoUpdate};
pub use project::{NewProject, Project, ProjectDescription, ProjectId, ProjectName};
pub use repository::{ProjectRepository, TodoCategoryRepository, TodoListFilter, TodoRepository};
pub use value_objects::{
    TodoDescription, TodoId, TodoPriority, TodoStatus, TodoTitle, parse_due_date,
};
