// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeletePostCommand {
    pub slug: String,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let post = self.load_owned_post(actor, &command.slug).await?;
        self.write_repo.delete(post.id).await?;
        tracing::info!(post_id = post.id.0, slug = %post.slug, "post deleted");
        Ok(())
    }
}
