// src/application/services/mod.rs
mod slugs;

pub use slugs::{SlugKind, SlugService};

use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, posts::PostCommandService,
            tags::TagCommandService, todos::TodoCommandService,
        },
        ports::time::Clock,
        queries::{
            categories::CategoryQueryService, posts::PostQueryService, tags::TagQueryService,
            todos::TodoQueryService,
        },
    },
    domain::{
        category::CategoryRepository,
        post::{PostReadRepository, PostWriteRepository},
        tag::TagRepository,
        todo::{ProjectRepository, TodoCategoryRepository, TodoRepository},
    },
};

/// Storage handles injected into the application layer.
#[derive(Clone)]
pub struct Repositories {
    pub post_write: Arc<dyn PostWriteRepository>,
    pub post_read: Arc<dyn PostReadRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub todos: Arc<dyn TodoRepository>,
    pub todo_categories: Arc<dyn TodoCategoryRepository>,
    pub projects: Arc<dyn ProjectRepository>,
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
    pub todo_commands: Arc<TodoCommandService>,
    pub todo_queries: Arc<TodoQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, clock: Arc<dyn Clock>, slug_write_attempts: u32) -> Self {
        let slug_service = Arc::new(SlugService::new(Arc::clone(&clock), slug_write_attempts));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.post_write),
            Arc::clone(&repos.post_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&repos.tags),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let todo_commands = Arc::new(TodoCommandService::new(
            Arc::clone(&repos.todos),
            Arc::clone(&repos.todo_categories),
            Arc::clone(&repos.projects),
            Arc::clone(&clock),
        ));
        let todo_queries = Arc::new(TodoQueryService::new(
            Arc::clone(&repos.todos),
            Arc::clone(&repos.todo_categories),
            Arc::clone(&repos.projects),
        ));

        Self {
            post_commands,
            post_queries: Arc::new(PostQueryService::new(Arc::clone(&repos.post_read))),
            category_commands,
            category_queries: Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories))),
            tag_commands,
            tag_queries: Arc::new(TagQueryService::new(Arc::clone(&repos.tags))),
            todo_commands,
            todo_queries,
        }
    }
}
