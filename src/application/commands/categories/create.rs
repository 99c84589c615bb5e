// src/application/commands/categories/create.rs
use super::{CategoryCommandService, service::category_slug_free};
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        services::SlugKind,
    },
    domain::{
        category::{CategoryDescription, CategoryName, NewCategory},
        slug::Slug,
    },
};

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let description = CategoryDescription::parse(command.description)?;

        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "category `{name}` already exists"
            )));
        }

        let now = self.clock.now();
        let repo = self.repo.as_ref();
        let created = self
            .slug_service
            .persist_with_slug(
                name.as_str(),
                SlugKind::Category,
                |candidate: &str| {
                    let candidate = candidate.to_owned();
                    async move { category_slug_free(repo, candidate, None).await }
                },
                |slug: Slug| {
                    let category = NewCategory {
                        name: name.clone(),
                        slug,
                        description: description.clone(),
                        created_at: now,
                    };
                    async move { repo.insert(category).await }
                },
            )
            .await?;

        tracing::info!(
            category_id = created.id.0,
            slug = %created.slug,
            actor = actor.id.0,
            "category created"
        );
        Ok(CategoryDto::with_count(created, 0))
    }
}
