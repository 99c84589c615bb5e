// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::SlugService,
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        errors::DomainResult,
        post::{PostId, PostReadRepository, PostWriteRepository},
        slug::Slug,
        tag::{TagId, TagRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            tag_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn ensure_category(
        &self,
        category_id: Option<i64>,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Some(raw) = category_id else {
            return Ok(None);
        };
        let id = CategoryId::new(raw)?;
        if self.category_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::validation("category does not exist"));
        }
        Ok(Some(id))
    }

    pub(super) async fn ensure_tags(&self, tag_ids: &[i64]) -> ApplicationResult<Vec<TagId>> {
        let mut ids = tag_ids
            .iter()
            .copied()
            .map(TagId::new)
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(ids);
        }

        let found = self.tag_repo.find_by_ids(&ids).await?;
        if found.len() != ids.len() {
            return Err(ApplicationError::validation("one or more tags do not exist"));
        }
        Ok(ids)
    }
}

/// Availability oracle for post slugs. A slug held by `owner` counts as free
/// so that an update may keep its own slug.
pub(super) async fn post_slug_free(
    read_repo: &dyn PostReadRepository,
    candidate: String,
    owner: Option<PostId>,
) -> DomainResult<bool> {
    let slug = Slug::new(candidate)?;
    Ok(match read_repo.find_by_slug(&slug).await? {
        Some(existing) => owner == Some(existing.id),
        None => true,
    })
}
