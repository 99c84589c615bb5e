use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::tag::{NewTag, Tag, TagId, TagName, TagRepository, TagUpdate, TagWithCount};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const TAG_COLUMNS: &str = "t.id, t.name, t.slug, t.created_at, t.updated_at";

/// Published posts carrying the tag.
const PUBLISHED_POST_COUNT: &str = "(SELECT COUNT(1) FROM post_tags pt \
     JOIN posts p ON p.id = pt.post_id \
     WHERE pt.tag_id = t.id AND p.published = 1)";

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTagRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagCountRow {
    #[sqlx(flatten)]
    tag: TagRow,
    post_count: i64,
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name, slug, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING id, name, slug, created_at, updated_at",
        )
        .bind(tag.name.as_str())
        .bind(tag.slug.as_str())
        .bind(tag.created_at)
        .bind(tag.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        let TagUpdate {
            id,
            name,
            slug,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE tags SET ");
        let mut set = builder.separated(", ");
        if let Some(name) = name {
            set.push("name = ").push_bind_unseparated(name.into_inner());
        }
        if let Some(slug) = slug {
            set.push("slug = ").push_bind_unseparated(slug.into_inner());
        }
        set.push("updated_at = ").push_bind_unseparated(updated_at);
        builder
            .push(" WHERE id = ")
            .push_bind(i64::from(id))
            .push(" RETURNING id, name, slug, created_at, updated_at");

        let row = builder
            .build_query_as::<TagRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;

        Tag::try_from(row)
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("DELETE FROM post_tags WHERE tag_id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("tag not found".into()));
        }
        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags t WHERE t.id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags t WHERE t.slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags t WHERE t.name = ?"
        ))
        .bind(name.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {TAG_COLUMNS} FROM tags t WHERE t.id IN ("));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(i64::from(*id));
        }
        separated.push_unseparated(") ORDER BY t.id");

        let rows = builder
            .build_query_as::<TagRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn list_with_post_counts(&self) -> DomainResult<Vec<TagWithCount>> {
        let rows = sqlx::query_as::<_, TagCountRow>(&format!(
            "SELECT {TAG_COLUMNS}, {PUBLISHED_POST_COUNT} AS post_count FROM tags t ORDER BY t.name ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(TagWithCount {
                    tag: Tag::try_from(row.tag)?,
                    post_count: u64::try_from(row.post_count).unwrap_or_default(),
                })
            })
            .collect()
    }

    async fn post_count(&self, id: TagId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT {PUBLISHED_POST_COUNT} FROM tags t WHERE t.id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .unwrap_or_default();
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
