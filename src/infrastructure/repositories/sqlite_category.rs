use super::error::map_sqlx;
use crate::domain::category::{
    Category, CategoryDescription, CategoryId, CategoryName, CategoryRepository, CategoryUpdate,
    CategoryWithCount, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const CATEGORY_COLUMNS: &str = "c.id, c.name, c.slug, c.description, c.created_at, c.updated_at";

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, column: &str, value: &str) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories c WHERE c.{column} = ?"
        ))
        .bind(value)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: CategoryDescription::parse(row.description)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryCountRow {
    #[sqlx(flatten)]
    category: CategoryRow,
    post_count: i64,
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            description,
            created_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING id, name, slug, description, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_ref().map(CategoryDescription::as_str))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            slug,
            description,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE categories SET ");
        let mut set = builder.separated(", ");
        if let Some(name) = name {
            set.push("name = ").push_bind_unseparated(name.into_inner());
        }
        if let Some(slug) = slug {
            set.push("slug = ").push_bind_unseparated(slug.into_inner());
        }
        if let Some(description) = description {
            set.push("description = ")
                .push_bind_unseparated(description.map(CategoryDescription::into_inner));
        }
        set.push("updated_at = ").push_bind_unseparated(updated_at);
        builder
            .push(" WHERE id = ")
            .push_bind(i64::from(id))
            .push(" RETURNING id, name, slug, description, created_at, updated_at");

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories c WHERE c.id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        self.fetch_one_where("slug", slug.as_str()).await
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        self.fetch_one_where("name", name.as_str()).await
    }

    async fn list_with_post_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let rows = sqlx::query_as::<_, CategoryCountRow>(&format!(
            "SELECT {CATEGORY_COLUMNS}, \
             (SELECT COUNT(1) FROM posts p WHERE p.category_id = c.id) AS post_count \
             FROM categories c ORDER BY c.name ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(CategoryWithCount {
                    category: Category::try_from(row.category)?,
                    post_count: u64::try_from(row.post_count).unwrap_or_default(),
                })
            })
            .collect()
    }

    async fn post_count(&self, id: CategoryId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM posts WHERE category_id = ?")
            .bind(i64::from(id))
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
