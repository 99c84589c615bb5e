use crate::domain::post::entity::Post;
use crate::domain::user::UserId;

/// Only a post's author may edit or delete it.
pub struct CanModifyPostSpec<'a> {
    post: &'a Post,
    user_id: UserId,
}

impl<'a> CanModifyPostSpec<'a> {
    pub fn new(post: &'a Post, user_id: UserId) -> Self {
        Self { post, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.post.is_authored_by(self.user_id)
    }
}

/// Drafts are visible to their author only.
pub struct CanViewPostSpec<'a> {
    post: &'a Post,
    viewer: Option<UserId>,
}

impl<'a> CanViewPostSpec<'a> {
    pub fn new(post: &'a Post, viewer: Option<UserId>) -> Self {
        Self { post, viewer }
    }

    pub fn is_satisfied(&self) -> bool {
        (self.post.published && self.post.published_at.is_some())
            || self.viewer.is_some_and(|id| self.post.is_authored_by(id))
    }
}
