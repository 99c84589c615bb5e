// src/application/commands/posts/create.rs
use super::{PostCommandService, service::post_slug_free};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
        services::SlugKind,
    },
    domain::{
        category::CategoryId,
        errors::DomainResult,
        post::{CoverImageUrl, NewPost, PostContent, PostExcerpt, PostTitle},
        slug::Slug,
        tag::TagId,
        user::UserId,
    },
};
use chrono::{DateTime, Utc};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub published: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    excerpt: Option<String>,
    cover_image: Option<String>,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
    published: bool,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }

    pub fn category_id(mut self, id: i64) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn tag_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.tag_ids = ids.into_iter().collect();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
            published: self.published,
        })
    }
}

/// Validated post waiting for its slug.
#[derive(Clone)]
struct PostDraft {
    title: PostTitle,
    content: PostContent,
    excerpt: Option<PostExcerpt>,
    cover_image: Option<CoverImageUrl>,
    published: bool,
    author_id: UserId,
    category_id: Option<CategoryId>,
    tag_ids: Vec<TagId>,
    now: DateTime<Utc>,
}

impl PostDraft {
    fn into_new_post(self, slug: Slug) -> NewPost {
        NewPost {
            title: self.title,
            slug,
            content: self.content,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            published: self.published,
            published_at: self.published.then_some(self.now),
            author_id: self.author_id,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
            created_at: self.now,
            updated_at: self.now,
        }
    }
}

/// Blank cover image input means "no cover image".
pub(super) fn parse_cover_image(value: Option<String>) -> DomainResult<Option<CoverImageUrl>> {
    match value {
        Some(url) if !url.trim().is_empty() => CoverImageUrl::new(url).map(Some),
        _ => Ok(None),
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let excerpt = command.excerpt.map(PostExcerpt::new).transpose()?;
        let cover_image = parse_cover_image(command.cover_image)?;
        let category_id = self.ensure_category(command.category_id).await?;
        let tag_ids = self.ensure_tags(&command.tag_ids).await?;

        let draft = PostDraft {
            title: title.clone(),
            content,
            excerpt,
            cover_image,
            published: command.published,
            author_id: actor.id,
            category_id,
            tag_ids,
            now: self.clock.now(),
        };

        let read_repo = self.read_repo.as_ref();
        let write_repo = self.write_repo.as_ref();
        let created = self
            .slug_service
            .persist_with_slug(
                title.as_str(),
                SlugKind::Post,
                |candidate: &str| {
                    let candidate = candidate.to_owned();
                    async move { post_slug_free(read_repo, candidate, None).await }
                },
                |slug: Slug| {
                    let post = draft.clone().into_new_post(slug);
                    async move { write_repo.insert(post).await }
                },
            )
            .await?;

        tracing::info!(post_id = created.id.0, slug = %created.slug, "post created");
        Ok(created.into())
    }
}
