// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Categories still referenced by posts are kept.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }

        let post_count = self.repo.post_count(id).await?;
        if post_count > 0 {
            return Err(ApplicationError::conflict(format!(
                "category is used by {post_count} post(s)"
            )));
        }

        self.repo.delete(id).await?;
        tracing::info!(category_id = id.0, actor = actor.id.0, "category deleted");
        Ok(())
    }
}
