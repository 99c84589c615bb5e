use crate::domain::{errors::DomainResult, user::UserId};
use chrono::Utc;
use sqlx::SqlitePool;

use super::repositories::error::map_sqlx;

pub const DEFAULT_CATEGORY_NAME: &str = "未分類";
pub const DEFAULT_CATEGORY_SLUG: &str = "uncategorized";
const DEFAULT_CATEGORY_DESCRIPTION: &str = "Posts filed without a category";
pub const DEFAULT_TODO_CATEGORY_NAME: &str = "デフォルト";
pub const DEFAULT_TODO_CATEGORY_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Copy)]
pub struct SeedOutcome {
    pub admin_id: UserId,
    pub category_created: bool,
    pub todo_category_created: bool,
}

/// Insert the default post category, the default todo category and an admin
/// account. Safe to run repeatedly.
pub async fn seed_defaults(pool: &SqlitePool, admin_email: &str) -> DomainResult<SeedOutcome> {
    let now = Utc::now();
    let mut tx = pool.begin().await.map_err(map_sqlx)?;

    let inserted = sqlx::query(
        "INSERT INTO categories (name, slug, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?) ON CONFLICT(slug) DO NOTHING",
    )
    .bind(DEFAULT_CATEGORY_NAME)
    .bind(DEFAULT_CATEGORY_SLUG)
    .bind(DEFAULT_CATEGORY_DESCRIPTION)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(map_sqlx)?;

    let todo_category = sqlx::query(
        "INSERT INTO todo_categories (name, color, created_at, updated_at) VALUES (?, ?, ?, ?) ON CONFLICT(name) DO NOTHING",
    )
    .bind(DEFAULT_TODO_CATEGORY_NAME)
    .bind(DEFAULT_TODO_CATEGORY_COLOR)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(map_sqlx)?;

    sqlx::query(
        "INSERT INTO users (name, email, role, created_at, updated_at) VALUES ('Administrator', ?, 'admin', ?, ?) ON CONFLICT(email) DO NOTHING",
    )
    .bind(admin_email)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(map_sqlx)?;

    let admin_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
        .bind(admin_email)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

    tx.commit().await.map_err(map_sqlx)?;

    let outcome = SeedOutcome {
        admin_id: UserId::new(admin_id)?,
        category_created: inserted.rows_affected() > 0,
        todo_category_created: todo_category.rows_affected() > 0,
    };
    tracing::info!(
        admin_id,
        category_created = outcome.category_created,
        todo_category_created = outcome.todo_category_created,
        "default data seeded"
    );
    Ok(outcome)
}
