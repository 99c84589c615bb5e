pub mod entity;
pub mod repository;

pub use entity::{NewTag, Tag, TagId, TagName, TagUpdate, TagWithCount};
pub use repository::TagRepository;
