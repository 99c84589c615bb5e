use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::todo::{
    NewProject, Project, ProjectDescription, ProjectId, ProjectName, ProjectRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const PROJECT_COLUMNS: &str = "id, owner_id, name, description, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteProjectRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProjectRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    owner_id: i64,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DomainError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: ProjectId::new(row.id)?,
            owner_id: UserId::new(row.owner_id)?,
            name: ProjectName::new(row.name)?,
            description: ProjectDescription::parse(row.description)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn insert(&self, project: NewProject) -> DomainResult<Project> {
        let NewProject {
            owner_id,
            name,
            description,
            created_at,
        } = project;

        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "INSERT INTO projects (owner_id, name, description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(i64::from(owner_id))
        .bind(name.as_str())
        .bind(description.as_ref().map(ProjectDescription::as_str))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Project::try_from(row)
    }

    async fn find_owned(&self, id: ProjectId, owner: UserId) -> DomainResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ? AND owner_id = ?"
        ))
        .bind(i64::from(id))
        .bind(i64::from(owner))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Project::try_from).transpose()
    }

    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE owner_id = ? ORDER BY name ASC, id ASC"
        ))
        .bind(i64::from(owner))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Project::try_from).collect()
    }
}
