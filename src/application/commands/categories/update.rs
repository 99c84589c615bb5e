// src/application/commands/categories/update.rs
use super::{CategoryCommandService, service::category_slug_free};
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        services::SlugKind,
    },
    domain::{
        category::{CategoryDescription, CategoryId, CategoryName, CategoryUpdate},
        slug::{Slug, normalize},
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    /// `Some(None)` removes the description.
    pub description: Option<Option<String>>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let mut update = CategoryUpdate::new(id, self.clock.now());
        if let Some(description) = command.description {
            update = update.with_description(CategoryDescription::parse(description)?);
        }

        let mut slug_source = None;
        if let Some(name) = command.name {
            let name = CategoryName::new(name)?;
            if name != current.name {
                let taken = self
                    .repo
                    .find_by_name(&name)
                    .await?
                    .is_some_and(|other| other.id != id);
                if taken {
                    return Err(ApplicationError::conflict(format!(
                        "category `{name}` already exists"
                    )));
                }
                if normalize(name.as_str()) != current.slug.as_str() {
                    slug_source = Some(name.clone());
                }
            }
            update = update.with_name(name);
        }

        let updated = match slug_source {
            Some(name) => {
                let repo = self.repo.as_ref();
                self.slug_service
                    .persist_with_slug(
                        name.as_str(),
                        SlugKind::Category,
                        |candidate: &str| {
                            let candidate = candidate.to_owned();
                            async move { category_slug_free(repo, candidate, Some(id)).await }
                        },
                        |slug: Slug| {
                            let update = update.clone().with_slug(slug);
                            async move { repo.update(update).await }
                        },
                    )
                    .await?
            }
            None => self.repo.update(update).await?,
        };

        let post_count = self.repo.post_count(id).await?;
        tracing::info!(
            category_id = updated.id.0,
            slug = %updated.slug,
            actor = actor.id.0,
            "category updated"
        );
        Ok(CategoryDto::with_count(updated, post_count))
    }
}
