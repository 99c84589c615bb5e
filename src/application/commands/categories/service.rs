// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, services::SlugService},
    domain::{
        category::{CategoryId, CategoryRepository},
        errors::DomainResult,
        slug::Slug,
    },
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }
}

pub(super) async fn category_slug_free(
    repo: &dyn CategoryRepository,
    candidate: String,
    owner: Option<CategoryId>,
) -> DomainResult<bool> {
    let slug = Slug::new(candidate)?;
    Ok(match repo.find_by_slug(&slug).await? {
        Some(existing) => owner == Some(existing.id),
        None => true,
    })
}
