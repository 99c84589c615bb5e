// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryRepository, slug::Slug},
};

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Every category ordered by name, with its post count.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.repo.list_with_post_counts().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_by_slug(&self, slug: &str) -> ApplicationResult<CategoryDto> {
        let not_found = || ApplicationError::not_found("category not found");
        let slug = Slug::new(slug).map_err(|_| not_found())?;
        let category = self.repo.find_by_slug(&slug).await?.ok_or_else(not_found)?;
        let post_count = self.repo.post_count(category.id).await?;
        Ok(CategoryDto::with_count(category, post_count))
    }
}
