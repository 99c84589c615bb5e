pub mod category;
pub mod errors;
pub mod post;
pub mod slug;
pub mod tag;
pub mod todo;
pub mod user;
pub(crate) mod validation;
