// src/application/commands/tags/commands.rs
use super::{TagCommandService, service::tag_slug_free};
use crate::{
    application::{
        dto::{AuthenticatedUser, TagDto},
        error::{ApplicationError, ApplicationResult},
        services::SlugKind,
    },
    domain::{
        slug::{Slug, normalize},
        tag::{NewTag, TagId, TagName, TagUpdate},
    },
};

#[derive(Debug, Clone)]
pub struct CreateTagCommand {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateTagCommand {
    pub id: i64,
    pub name: String,
}

pub struct DeleteTagCommand {
    pub id: i64,
}

impl TagCommandService {
    pub async fn create_tag(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTagCommand,
    ) -> ApplicationResult<TagDto> {
        let name = TagName::new(command.name)?;
        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "tag `{name}` already exists"
            )));
        }

        let now = self.clock.now();
        let repo = self.repo.as_ref();
        let created = self
            .slug_service
            .persist_with_slug(
                name.as_str(),
                SlugKind::Tag,
                |candidate: &str| {
                    let candidate = candidate.to_owned();
                    async move { tag_slug_free(repo, candidate, None).await }
                },
                |slug: Slug| {
                    let tag = NewTag {
                        name: name.clone(),
                        slug,
                        created_at: now,
                    };
                    async move { repo.insert(tag).await }
                },
            )
            .await?;

        tracing::info!(tag_id = created.id.0, slug = %created.slug, actor = actor.id.0, "tag created");
        Ok(TagDto::with_count(created, 0))
    }

    /// Renames a tag. The slug follows the name unless both normalize alike.
    pub async fn update_tag(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTagCommand,
    ) -> ApplicationResult<TagDto> {
        let id = TagId::new(command.id)?;
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;
        let name = TagName::new(command.name)?;

        if name == current.name {
            let post_count = self.repo.post_count(id).await?;
            return Ok(TagDto::with_count(current, post_count));
        }

        let taken = self
            .repo
            .find_by_name(&name)
            .await?
            .is_some_and(|other| other.id != id);
        if taken {
            return Err(ApplicationError::conflict(format!(
                "tag `{name}` already exists"
            )));
        }

        let update = TagUpdate::new(id, self.clock.now()).with_name(name.clone());
        let updated = if normalize(name.as_str()) == current.slug.as_str() {
            self.repo.update(update).await?
        } else {
            let repo = self.repo.as_ref();
            self.slug_service
                .persist_with_slug(
                    name.as_str(),
                    SlugKind::Tag,
                    |candidate: &str| {
                        let candidate = candidate.to_owned();
                        async move { tag_slug_free(repo, candidate, Some(id)).await }
                    },
                    |slug: Slug| {
                        let update = update.clone().with_slug(slug);
                        async move { repo.update(update).await }
                    },
                )
                .await?
        };

        let post_count = self.repo.post_count(id).await?;
        tracing::info!(tag_id = updated.id.0, slug = %updated.slug, actor = actor.id.0, "tag updated");
        Ok(TagDto::with_count(updated, post_count))
    }

    /// Deleting a tag detaches it from every post.
    pub async fn delete_tag(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteTagCommand,
    ) -> ApplicationResult<()> {
        let id = TagId::new(command.id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("tag not found"));
        }
        self.repo.delete(id).await?;
        tracing::info!(tag_id = id.0, actor = actor.id.0, "tag deleted");
        Ok(())
    }
}
