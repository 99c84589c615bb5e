pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate, PublishStateUpdate};
pub use repository::{PostListFilter, PostReadRepository, PostWriteRepository};
pub use value_objects::{CoverImageUrl, PostContent, PostExcerpt, PostId, PostTitle};
