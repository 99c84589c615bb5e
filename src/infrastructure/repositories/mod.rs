// src/infrastructure/repositories/mod.rs
pub mod error;
mod sqlite_category;
mod sqlite_post;
mod sqlite_project;
mod sqlite_tag;
mod sqlite_todo;
mod sqlite_todo_category;

pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
pub use sqlite_project::SqliteProjectRepository;
pub use sqlite_tag::SqliteTagRepository;
pub use sqlite_todo::SqliteTodoRepository;
pub use sqlite_todo_category::SqliteTodoCategoryRepository;
