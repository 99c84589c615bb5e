use super::error::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    CoverImageUrl, NewPost, Post, PostContent, PostExcerpt, PostId, PostListFilter,
    PostReadRepository, PostTitle, PostUpdate, PostWriteRepository,
};
use crate::domain::slug::Slug;
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;

const POST_COLUMNS: &str = "p.id, p.title, p.slug, p.content, p.excerpt, p.cover_image, \
     p.published, p.published_at, p.author_id, p.category_id, p.created_at, p.updated_at";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    cover_image: Option<String>,
    published: i64,
    published_at: Option<DateTime<Utc>>,
    author_id: i64,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, tag_ids: Vec<TagId>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            content: PostContent::new(self.content)?,
            excerpt: self.excerpt.map(PostExcerpt::new).transpose()?,
            cover_image: self.cover_image.map(CoverImageUrl::new).transpose()?,
            published: self.published != 0,
            published_at: self.published_at,
            author_id: UserId::new(self.author_id)?,
            category_id: self.category_id.map(CategoryId::new).transpose()?,
            tag_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

async fn tag_ids_for(
    conn: &mut SqliteConnection,
    post_ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<TagId>>> {
    let mut by_post: HashMap<i64, Vec<TagId>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(by_post);
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT post_id, tag_id FROM post_tags WHERE post_id IN (");
    let mut separated = builder.separated(", ");
    for id in post_ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY tag_id");

    let links: Vec<(i64, i64)> = builder
        .build_query_as()
        .fetch_all(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for (post_id, tag_id) in links {
        by_post.entry(post_id).or_default().push(TagId::new(tag_id)?);
    }
    Ok(by_post)
}

async fn hydrate(conn: &mut SqliteConnection, rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = tag_ids_for(conn, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let tag_ids = tags.remove(&row.id).unwrap_or_default();
            row.into_post(tag_ids)
        })
        .collect()
}

async fn fetch_post(conn: &mut SqliteConnection, id: i64) -> DomainResult<Option<Post>> {
    let row = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {POST_COLUMNS} FROM posts p WHERE p.id = ?"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    match row {
        Some(row) => Ok(hydrate(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

async fn replace_tags(
    conn: &mut SqliteConnection,
    post_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
        .bind(post_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for tag_id in tag_ids {
        sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(i64::from(*tag_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            excerpt,
            cover_image,
            published,
            published_at,
            author_id,
            category_id,
            tag_ids,
            created_at,
            updated_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO posts (title, slug, content, excerpt, cover_image, published, published_at, author_id, category_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt.as_ref().map(PostExcerpt::as_str))
        .bind(cover_image.as_ref().map(CoverImageUrl::as_str))
        .bind(i64::from(published))
        .bind(published_at)
        .bind(i64::from(author_id))
        .bind(category_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, id, &tag_ids).await?;
        let created = fetch_post(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted post vanished".into()))?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            cover_image,
            category_id,
            tag_ids,
            publish_state,
            updated_at,
        } = update;
        let id = i64::from(id);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE posts SET ");
        let mut set = builder.separated(", ");
        if let Some(title) = title {
            set.push("title = ").push_bind_unseparated(title.into_inner());
        }
        if let Some(slug) = slug {
            set.push("slug = ").push_bind_unseparated(slug.into_inner());
        }
        if let Some(content) = content {
            set.push("content = ").push_bind_unseparated(content.into_inner());
        }
        if let Some(excerpt) = excerpt {
            set.push("excerpt = ")
                .push_bind_unseparated(excerpt.map(PostExcerpt::into_inner));
        }
        if let Some(cover_image) = cover_image {
            set.push("cover_image = ")
                .push_bind_unseparated(cover_image.map(CoverImageUrl::into_inner));
        }
        if let Some(category_id) = category_id {
            set.push("category_id = ")
                .push_bind_unseparated(category_id.map(i64::from));
        }
        if let Some(state) = publish_state {
            set.push("published = ")
                .push_bind_unseparated(i64::from(state.published));
            set.push("published_at = ")
                .push_bind_unseparated(state.published_at);
        }
        set.push("updated_at = ").push_bind_unseparated(updated_at);
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }

        if let Some(tag_ids) = tag_ids {
            replace_tags(&mut tx, id, &tag_ids).await?;
        }

        let updated = fetch_post(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

fn apply_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &PostListFilter) {
    builder.push(" WHERE p.published = 1");
    if let Some(category_id) = filter.category_id {
        builder
            .push(" AND p.category_id = ")
            .push_bind(i64::from(category_id));
    }
    if let Some(tag_id) = filter.tag_id {
        builder
            .push(" AND EXISTS (SELECT 1 FROM post_tags pt WHERE pt.post_id = p.id AND pt.tag_id = ")
            .push_bind(i64::from(tag_id))
            .push(")");
    }
    if let Some(search) = filter.search.as_deref() {
        let pattern = format!("%{search}%");
        builder
            .push(" AND (p.title LIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.content LIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.excerpt LIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        fetch_post(&mut conn, i64::from(id)).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE p.slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(hydrate(&mut conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_published(
        &self,
        filter: &PostListFilter,
        page: u32,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let page = page.max(1);
        let limit = limit.max(1);
        let offset = i64::from(page - 1) * i64::from(limit);
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts p"));
        apply_filter(&mut list_builder, filter);
        list_builder
            .push(" ORDER BY p.published_at DESC, p.id DESC LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = list_builder
            .build_query_as::<PostRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM posts p");
        apply_filter(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        let posts = hydrate(&mut conn, rows).await?;
        Ok((posts, u64::try_from(total).unwrap_or_default()))
    }
}
