// src/application/commands/tags/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, services::SlugService},
    domain::{
        errors::DomainResult,
        slug::Slug,
        tag::{TagId, TagRepository},
    },
};

pub struct TagCommandService {
    pub(super) repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TagCommandService {
    pub fn new(
        repo: Arc<dyn TagRepository>,
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

pub(super) async fn tag_slug_free(
    repo: &dyn TagRepository,
    candidate: String,
    owner: Option<TagId>,
) -> DomainResult<bool> {
    let slug = Slug::new(candidate)?;
    Ok(match repo.find_by_slug(&slug).await? {
        Some(existing) => owner == Some(existing.id),
        None => true,
    })
}
