// src/application/commands/todos/mod.rs
mod catalog;
mod commands;
mod service;

pub use catalog::{CreateProjectCommand, CreateTodoCategoryCommand};
pub use commands::{CreateTodoCommand, DeleteTodoCommand, UpdateTodoCommand};
pub use service::TodoCommandService;
