use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::Slug;
use crate::domain::tag::TagId;
use async_trait::async_trait;

/// Filters for the public post listing. Only published posts are listed.
#[derive(Debug, Clone, Default)]
pub struct PostListFilter {
    pub category_id: Option<CategoryId>,
    pub tag_id: Option<TagId>,
    pub search: Option<String>,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Fails with `DomainError::SlugTaken` when storage already holds the slug.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    /// Returns one page of published posts, newest first, and the total count.
    async fn list_published(
        &self,
        filter: &PostListFilter,
        page: u32,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
