// src/domain/post/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{
    CoverImageUrl, PostContent, PostExcerpt, PostId, PostTitle,
};
use crate::domain::slug::Slug;
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub excerpt: Option<PostExcerpt>,
    pub cover_image: Option<CoverImageUrl>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Publishing keeps an existing `published_at`; unpublishing clears it.
    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        if published {
            self.published = true;
            if self.published_at.is_none() {
                self.published_at = Some(now);
            }
        } else {
            self.published = false;
            self.published_at = None;
        }
        self.updated_at = now;
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub excerpt: Option<PostExcerpt>,
    pub cover_image: Option<CoverImageUrl>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update of a post. `None` leaves a column untouched; for nullable
/// columns `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<Slug>,
    pub content: Option<PostContent>,
    pub excerpt: Option<Option<PostExcerpt>>,
    pub cover_image: Option<Option<CoverImageUrl>>,
    pub category_id: Option<Option<CategoryId>>,
    pub tag_ids: Option<Vec<TagId>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            cover_image: None,
            category_id: None,
            tag_ids: None,
            publish_state: None,
            updated_at,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn with_excerpt(mut self, excerpt: Option<PostExcerpt>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    #[must_use]
    pub fn with_cover_image(mut self, cover_image: Option<CoverImageUrl>) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    #[must_use]
    pub fn with_publish_state(
        mut self,
        published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            published,
            published_at,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.cover_image.is_none()
            && self.category_id.is_none()
            && self.tag_ids.is_none()
            && self.publish_state.is_none()
    }
}
