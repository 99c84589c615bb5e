//! URL slug derivation for posts, categories and tags.
//!
//! [`normalize`] turns display text into an ASCII slug, [`needs_fallback`]
//! decides when that slug is unusable, and [`generate_unique_slug`] walks
//! numbered candidates against a caller-supplied availability oracle until
//! one is free. Storage must still enforce a unique constraint: the oracle is
//! consulted without holding any reservation.

mod fallback;
mod normalize;
mod resolver;
mod value;

pub use fallback::{contains_cjk, needs_fallback};
pub use normalize::normalize;
pub use resolver::{
    DEFAULT_FALLBACK_PREFIX, MAX_ATTEMPTS, SlugError, SlugResolveError, fallback_slug,
    generate_unique_slug, generate_unique_slug_at,
};
pub use value::Slug;
