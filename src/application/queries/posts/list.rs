// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{PaginatedResult, PostSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryId, post::PostListFilter, tag::TagId},
};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Public listing of published posts.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
    /// Matched against title, content and excerpt.
    pub search: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<PaginatedResult<PostSummaryDto>> {
        let page = query.page.unwrap_or(1);
        if page == 0 {
            return Err(ApplicationError::validation("page must be at least 1"));
        }
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ApplicationError::validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let filter = PostListFilter {
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            tag_id: query.tag_id.map(TagId::new).transpose()?,
            search: query
                .search
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty()),
        };

        let (posts, total) = self.read_repo.list_published(&filter, page, limit).await?;
        let items = posts.into_iter().map(Into::into).collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }
}
