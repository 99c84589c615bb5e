// src/application/commands/posts/update.rs
use super::{PostCommandService, create::parse_cover_image, service::post_slug_free};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        services::SlugKind,
    },
    domain::{
        post::{
            Post, PostContent, PostExcerpt, PostTitle, PostUpdate,
            specifications::CanModifyPostSpec,
        },
        slug::{Slug, normalize},
    },
};

/// Partial update of the post currently published under `slug`.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub slug: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub category_id: Option<Option<i64>>,
    pub tag_ids: Option<Vec<i64>>,
    pub published: Option<bool>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let mut post = self.load_owned_post(actor, &command.slug).await?;

        let UpdatePostCommand {
            slug: _,
            title,
            content,
            excerpt,
            cover_image,
            category_id,
            tag_ids,
            published,
        } = command;

        let now = self.clock.now();
        let mut update = PostUpdate::new(post.id, now);

        let title = title.map(PostTitle::new).transpose()?;
        if let Some(content) = content {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(excerpt.map(PostExcerpt::new).transpose()?);
        }
        if let Some(cover_image) = cover_image {
            update = update.with_cover_image(parse_cover_image(cover_image)?);
        }
        if let Some(category_id) = category_id {
            update = update.with_category(self.ensure_category(category_id).await?);
        }
        if let Some(tag_ids) = tag_ids {
            update = update.with_tags(self.ensure_tags(&tag_ids).await?);
        }
        if let Some(flag) = published {
            post.set_published(flag, now);
            update = update.with_publish_state(post.published, post.published_at);
        }

        let slug_source = match title {
            Some(title) => {
                let recompute = needs_new_slug(&post, &title);
                update = update.with_title(title.clone());
                recompute.then_some(title)
            }
            None => None,
        };

        let updated = match slug_source {
            Some(title) => {
                let read_repo = self.read_repo.as_ref();
                let write_repo = self.write_repo.as_ref();
                let own_id = post.id;
                self.slug_service
                    .persist_with_slug(
                        title.as_str(),
                        SlugKind::Post,
                        |candidate: &str| {
                            let candidate = candidate.to_owned();
                            async move { post_slug_free(read_repo, candidate, Some(own_id)).await }
                        },
                        |slug: Slug| {
                            let update = update.clone().with_slug(slug);
                            async move { write_repo.update(update).await }
                        },
                    )
                    .await?
            }
            None => self.write_repo.update(update).await?,
        };

        if updated.slug != post.slug {
            tracing::info!(
                post_id = updated.id.0,
                old_slug = %post.slug,
                new_slug = %updated.slug,
                "post slug changed"
            );
        }
        tracing::info!(post_id = updated.id.0, "post updated");
        Ok(updated.into())
    }

    pub(super) async fn load_owned_post(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<Post> {
        let not_found = || ApplicationError::not_found("post not found");
        let slug = Slug::new(slug).map_err(|_| not_found())?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        if !CanModifyPostSpec::new(&post, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may modify this post",
            ));
        }
        Ok(post)
    }
}

/// A rename keeps the stored slug when it would normalize to the same value.
fn needs_new_slug(post: &Post, title: &PostTitle) -> bool {
    title != &post.title && normalize(title.as_str()) != post.slug.as_str()
}
