use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::tag::entity::{NewTag, Tag, TagId, TagName, TagUpdate, TagWithCount};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn update(&self, update: TagUpdate) -> DomainResult<Tag>;
    /// Removes the tag together with its post links.
    async fn delete(&self, id: TagId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>>;
    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>>;
    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>>;
    /// Counts published posts only, matching the listing.
    async fn list_with_post_counts(&self) -> DomainResult<Vec<TagWithCount>>;
    async fn post_count(&self, id: TagId) -> DomainResult<u64>;
}
