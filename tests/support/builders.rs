// tests/support/builders.rs
use std::sync::Arc;

use jotter_core::application::dto::AuthenticatedUser;
use jotter_core::application::services::{ApplicationServices, Repositories};
use jotter_core::domain::post::{Post, PostContent, PostId, PostTitle};
use jotter_core::domain::slug::Slug;
use jotter_core::domain::tag::TagId;
use jotter_core::domain::user::{Role, UserId};

use super::mocks::{DummyClock, InMemoryContent, InMemoryTodos, fixed_now};

pub fn author(id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(id).unwrap(), Role::User)
}

pub fn services_with(
    content: &Arc<InMemoryContent>,
    todos: &Arc<InMemoryTodos>,
    slug_write_attempts: u32,
) -> ApplicationServices {
    let repos = Repositories {
        post_write: content.clone(),
        post_read: content.clone(),
        categories: content.clone(),
        tags: content.clone(),
        todos: todos.clone(),
        todo_categories: todos.clone(),
        projects: todos.clone(),
    };
    ApplicationServices::new(repos, Arc::new(DummyClock), slug_write_attempts)
}

pub fn services(content: &Arc<InMemoryContent>) -> ApplicationServices {
    services_with(content, &Arc::new(InMemoryTodos::new()), 3)
}

pub struct PostBuilder {
    title: String,
    slug: String,
    content: String,
    published: bool,
    author_id: i64,
    tag_ids: Vec<i64>,
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Post".into(),
            slug: "test-post".into(),
            content: "Test body".into(),
            published: false,
            author_id: 1,
            tag_ids: vec![],
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn author(mut self, id: i64) -> Self {
        self.author_id = id;
        self
    }

    pub fn tags(mut self, ids: &[i64]) -> Self {
        self.tag_ids = ids.to_vec();
        self
    }

    /// The id is reassigned when the post is stored.
    pub fn build(self) -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            content: PostContent::new(self.content).unwrap(),
            excerpt: None,
            cover_image: None,
            published: self.published,
            published_at: self.published.then(fixed_now),
            author_id: UserId::new(self.author_id).unwrap(),
            category_id: None,
            tag_ids: self
                .tag_ids
                .into_iter()
                .map(|id| TagId::new(id).unwrap())
                .collect(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
