// tests/support/mocks/content.rs
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use jotter_core::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, CategoryWithCount,
    NewCategory,
};
use jotter_core::domain::errors::{DomainError, DomainResult};
use jotter_core::domain::post::{
    NewPost, Post, PostContent, PostId, PostListFilter, PostReadRepository, PostTitle,
    PostUpdate, PostWriteRepository,
};
use jotter_core::domain::slug::Slug;
use jotter_core::domain::tag::{
    NewTag, Tag, TagId, TagName, TagRepository, TagUpdate, TagWithCount,
};
use jotter_core::domain::user::UserId;

use super::time::fixed_now;

/// Author id of rows written "concurrently" behind the service's back.
pub const RIVAL_AUTHOR: i64 = 999;

#[derive(Default)]
struct State {
    posts: BTreeMap<i64, Post>,
    categories: BTreeMap<i64, Category>,
    tags: BTreeMap<i64, Tag>,
    next_id: i64,
    /// (table, slug) pairs claimed by a rival writer after the oracle looked.
    rival_slugs: HashSet<(&'static str, String)>,
    slug_lookups: usize,
    writes: usize,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// A rival claim surfaces as a committed row once a write collides with it.
    fn claim(&mut self, table: &'static str, slug: &Slug) -> DomainResult<()> {
        if !self.rival_slugs.remove(&(table, slug.as_str().to_owned())) {
            return Ok(());
        }
        let id = self.next_id();
        let now = fixed_now();
        match table {
            "posts" => {
                self.posts.insert(
                    id,
                    Post {
                        id: PostId::new(id).unwrap(),
                        title: PostTitle::new(format!("rival {slug}")).unwrap(),
                        slug: slug.clone(),
                        content: PostContent::new("rival").unwrap(),
                        excerpt: None,
                        cover_image: None,
                        published: false,
                        published_at: None,
                        author_id: UserId::new(RIVAL_AUTHOR).unwrap(),
                        category_id: None,
                        tag_ids: vec![],
                        created_at: now,
                        updated_at: now,
                    },
                );
            }
            "categories" => {
                self.categories.insert(
                    id,
                    Category {
                        id: CategoryId::new(id).unwrap(),
                        name: CategoryName::new(format!("rival {slug}")).unwrap(),
                        slug: slug.clone(),
                        description: None,
                        created_at: now,
                        updated_at: now,
                    },
                );
            }
            _ => {
                self.tags.insert(
                    id,
                    Tag {
                        id: TagId::new(id).unwrap(),
                        name: TagName::new(format!("rival {slug}")).unwrap(),
                        slug: slug.clone(),
                        created_at: now,
                        updated_at: now,
                    },
                );
            }
        }
        Err(DomainError::SlugTaken(format!("{table}.slug")))
    }

    fn post_slug_clash(&mut self, slug: &Slug, own: Option<i64>) -> DomainResult<()> {
        if self
            .posts
            .values()
            .any(|p| &p.slug == slug && Some(i64::from(p.id)) != own)
        {
            return Err(DomainError::SlugTaken("posts.slug".into()));
        }
        self.claim("posts", slug)
    }

    fn category_clash(
        &mut self,
        name: Option<&CategoryName>,
        slug: Option<&Slug>,
        own: Option<i64>,
    ) -> DomainResult<()> {
        let others = || {
            self.categories
                .values()
                .filter(move |c| Some(i64::from(c.id)) != own)
        };
        if let Some(name) = name {
            if others().any(|c| &c.name == name) {
                return Err(DomainError::Conflict("name already exists".into()));
            }
        }
        if let Some(slug) = slug {
            if others().any(|c| &c.slug == slug) {
                return Err(DomainError::SlugTaken("categories.slug".into()));
            }
            return self.claim("categories", slug);
        }
        Ok(())
    }

    fn tag_clash(
        &mut self,
        name: Option<&TagName>,
        slug: Option<&Slug>,
        own: Option<i64>,
    ) -> DomainResult<()> {
        let others = || self.tags.values().filter(move |t| Some(i64::from(t.id)) != own);
        if let Some(name) = name {
            if others().any(|t| &t.name == name) {
                return Err(DomainError::Conflict("name already exists".into()));
            }
        }
        if let Some(slug) = slug {
            if others().any(|t| &t.slug == slug) {
                return Err(DomainError::SlugTaken("tags.slug".into()));
            }
            return self.claim("tags", slug);
        }
        Ok(())
    }
}

/// Posts, categories and tags kept in one store so that counts and tag
/// removal see each other.
#[derive(Default)]
pub struct InMemoryContent {
    state: Mutex<State>,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `slug` look free to lookups but collide on the next write.
    pub fn rival_claims(&self, table: &'static str, slug: &str) {
        self.state
            .lock()
            .unwrap()
            .rival_slugs
            .insert((table, slug.to_owned()));
    }

    pub fn slug_lookups(&self) -> usize {
        self.state.lock().unwrap().slug_lookups
    }

    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state.lock().unwrap().posts.values().cloned().collect()
    }

    pub fn put_post(&self, mut post: Post) -> Post {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        post.id = PostId::new(id).unwrap();
        state.posts.insert(id, post.clone());
        post
    }

    pub fn put_category(&self, name: &str, slug: &str) -> Category {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let category = Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
            description: None,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        };
        state.categories.insert(id, category.clone());
        category
    }

    pub fn put_tag(&self, name: &str, slug: &str) -> Tag {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let tag = Tag {
            id: TagId::new(id).unwrap(),
            name: TagName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        };
        state.tags.insert(id, tag.clone());
        tag
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryContent {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.post_slug_clash(&post.slug, None)?;
        let id = state.next_id();
        let created = Post {
            id: PostId::new(id)?,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            cover_image: post.cover_image,
            published: post.published,
            published_at: post.published_at,
            author_id: post.author_id,
            category_id: post.category_id,
            tag_ids: post.tag_ids,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        state.posts.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        let id = i64::from(update.id);
        if let Some(slug) = &update.slug {
            state.post_slug_clash(slug, Some(id))?;
        }
        let post = state
            .posts
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(cover_image) = update.cover_image {
            post.cover_image = cover_image;
        }
        if let Some(category_id) = update.category_id {
            post.category_id = category_id;
        }
        if let Some(tag_ids) = update.tag_ids {
            post.tag_ids = tag_ids;
        }
        if let Some(publish) = update.publish_state {
            post.published = publish.published;
            post.published_at = publish.published_at;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .posts
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryContent {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let mut state = self.state.lock().unwrap();
        state.slug_lookups += 1;
        Ok(state.posts.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list_published(
        &self,
        filter: &PostListFilter,
        page: u32,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let state = self.state.lock().unwrap();
        let mut matching: Vec<Post> = state
            .posts
            .values()
            .filter(|p| p.published)
            .filter(|p| filter.category_id.is_none_or(|c| p.category_id == Some(c)))
            .filter(|p| filter.tag_id.is_none_or(|t| p.tag_ids.contains(&t)))
            .filter(|p| {
                filter.search.as_deref().is_none_or(|needle| {
                    p.title.as_str().contains(needle)
                        || p.content.as_str().contains(needle)
                        || p.excerpt.as_ref().is_some_and(|e| e.as_str().contains(needle))
                })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(b.id.0.cmp(&a.id.0)));

        let total = matching.len() as u64;
        let skip = ((page.max(1) - 1) * limit) as usize;
        let items = matching.into_iter().skip(skip).take(limit as usize).collect();
        Ok((items, total))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryContent {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.category_clash(Some(&category.name), Some(&category.slug), None)?;
        let id = state.next_id();
        let created = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        state.categories.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        let id = i64::from(update.id);
        state.category_clash(update.name.as_ref(), update.slug.as_ref(), Some(id))?;
        let category = state
            .categories
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(description) = update.description {
            category.description = description;
        }
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .categories
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.state.lock().unwrap().categories.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let mut state = self.state.lock().unwrap();
        state.slug_lookups += 1;
        Ok(state.categories.values().find(|c| &c.slug == slug).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.values().find(|c| &c.name == name).cloned())
    }

    async fn list_with_post_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let state = self.state.lock().unwrap();
        let mut all: Vec<CategoryWithCount> = state
            .categories
            .values()
            .map(|c| CategoryWithCount {
                category: c.clone(),
                post_count: state
                    .posts
                    .values()
                    .filter(|p| p.category_id == Some(c.id))
                    .count() as u64,
            })
            .collect();
        all.sort_by(|a, b| a.category.name.as_str().cmp(b.category.name.as_str()));
        Ok(all)
    }

    async fn post_count(&self, id: CategoryId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .values()
            .filter(|p| p.category_id == Some(id))
            .count() as u64)
    }
}

#[async_trait]
impl TagRepository for InMemoryContent {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.tag_clash(Some(&tag.name), Some(&tag.slug), None)?;
        let id = state.next_id();
        let created = Tag {
            id: TagId::new(id)?,
            name: tag.name,
            slug: tag.slug,
            created_at: tag.created_at,
            updated_at: tag.created_at,
        };
        state.tags.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        let id = i64::from(update.id);
        state.tag_clash(update.name.as_ref(), update.slug.as_ref(), Some(id))?;
        let tag = state
            .tags
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;
        if let Some(name) = update.name {
            tag.name = name;
        }
        if let Some(slug) = update.slug {
            tag.slug = slug;
        }
        tag.updated_at = update.updated_at;
        Ok(tag.clone())
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .tags
            .remove(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;
        for post in state.posts.values_mut() {
            post.tag_ids.retain(|t| *t != id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self.state.lock().unwrap().tags.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let mut state = self.state.lock().unwrap();
        state.slug_lookups += 1;
        Ok(state.tags.values().find(|t| &t.slug == slug).cloned())
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.values().find(|t| &t.name == name).cloned())
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| state.tags.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn list_with_post_counts(&self) -> DomainResult<Vec<TagWithCount>> {
        let state = self.state.lock().unwrap();
        let mut all: Vec<TagWithCount> = state
            .tags
            .values()
            .map(|t| TagWithCount {
                tag: t.clone(),
                post_count: state
                    .posts
                    .values()
                    .filter(|p| p.published && p.tag_ids.contains(&t.id))
                    .count() as u64,
            })
            .collect();
        all.sort_by(|a, b| a.tag.name.as_str().cmp(b.tag.name.as_str()));
        Ok(all)
    }

    async fn post_count(&self, id: TagId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .values()
            .filter(|p| p.published && p.tag_ids.contains(&id))
            .count() as u64)
    }
}
