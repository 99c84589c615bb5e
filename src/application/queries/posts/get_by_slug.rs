// src/application/queries/posts/get_by_slug.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::specifications::CanViewPostSpec, slug::Slug},
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Drafts are reported as missing to everyone but their author.
    pub async fn get_post_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPostBySlugQuery,
    ) -> ApplicationResult<PostDto> {
        let not_found = || ApplicationError::not_found("post not found");
        let slug = Slug::new(query.slug).map_err(|_| not_found())?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        if !CanViewPostSpec::new(&post, actor.map(|a| a.id)).is_satisfied() {
            return Err(not_found());
        }
        Ok(post.into())
    }
}
