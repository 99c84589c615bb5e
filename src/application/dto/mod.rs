pub mod auth;
pub mod categories;
pub mod errors;
pub mod pagination;
pub mod posts;
pub mod serde_time;
pub mod tags;
pub mod todos;

pub use auth::AuthenticatedUser;
pub use categories::CategoryDto;
pub use errors::{ErrorBody, ErrorDetail};
pub use pagination::PaginatedResult;
pub use posts::{PostDto, PostSummaryDto};
pub use tags::TagDto;
pub use todos::{ProjectDto, TodoCategoryDto, TodoDto};
