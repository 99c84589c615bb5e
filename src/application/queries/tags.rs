// src/application/queries/tags.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{slug::Slug, tag::TagRepository},
};

pub struct TagQueryService {
    repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.repo.list_with_post_counts().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }

    pub async fn get_tag_by_slug(&self, slug: &str) -> ApplicationResult<TagDto> {
        let not_found = || ApplicationError::not_found("tag not found");
        let slug = Slug::new(slug).map_err(|_| not_found())?;
        let tag = self.repo.find_by_slug(&slug).await?.ok_or_else(not_found)?;
        let post_count = self.repo.post_count(tag.id).await?;
        Ok(TagDto::with_count(tag, post_count))
    }
}
