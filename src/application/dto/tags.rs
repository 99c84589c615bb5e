use crate::domain::tag::{Tag, TagWithCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub post_count: u64,
}

impl TagDto {
    pub fn with_count(tag: Tag, post_count: u64) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into_inner(),
            slug: tag.slug.into_inner(),
            post_count,
        }
    }
}

impl From<TagWithCount> for TagDto {
    fn from(value: TagWithCount) -> Self {
        Self::with_count(value.tag, value.post_count)
    }
}
