use super::{needs_fallback, normalize};
use chrono::{DateTime, Utc};
use std::future::Future;
use thiserror::Error;

/// Upper bound on oracle checks for a single resolution.
pub const MAX_ATTEMPTS: u32 = 1000;

pub const DEFAULT_FALLBACK_PREFIX: &str = "item";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    InvalidInput,
    #[error("no unique slug for `{base}` after {attempts} attempts")]
    Exhausted { base: String, attempts: u32 },
}

/// Failure of [`generate_unique_slug`]: either the resolver gave up or the
/// oracle itself failed, in which case its error is carried untouched.
#[derive(Debug, Error)]
pub enum SlugResolveError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[error(transparent)]
    Slug(#[from] SlugError),
    #[error(transparent)]
    Oracle(E),
}

/// Timestamp-based candidate used when the normalized text is unusable.
pub fn fallback_slug(prefix: &str, now: DateTime<Utc>) -> String {
    let prefix = normalize(prefix);
    let prefix = if prefix.is_empty() {
        DEFAULT_FALLBACK_PREFIX
    } else {
        prefix.as_str()
    };
    format!("{prefix}-{}", now.timestamp_millis())
}

/// Resolve a slug for `base_text` that `is_available` accepts, using the
/// current system time for fallback candidates.
pub async fn generate_unique_slug<F, Fut, E>(
    base_text: &str,
    is_available: F,
    fallback_prefix: &str,
) -> Result<String, SlugResolveError<E>>
where
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    generate_unique_slug_at(base_text, is_available, fallback_prefix, Utc::now()).await
}

/// Same as [`generate_unique_slug`] with the fallback timestamp taken from
/// `now`.
///
/// The oracle is awaited once per candidate: first the base slug, then
/// `base-1`, `base-2`, ... The returned slug is the one the oracle last
/// accepted. After [`MAX_ATTEMPTS`] rejections the resolution fails with
/// [`SlugError::Exhausted`].
pub async fn generate_unique_slug_at<F, Fut, E>(
    base_text: &str,
    mut is_available: F,
    fallback_prefix: &str,
    now: DateTime<Utc>,
) -> Result<String, SlugResolveError<E>>
where
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    if base_text.is_empty() {
        return Err(SlugError::InvalidInput.into());
    }

    let normalized = normalize(base_text);
    let base = if needs_fallback(&normalized, base_text) {
        let fallback = fallback_slug(fallback_prefix, now);
        tracing::debug!(normalized = %normalized, fallback = %fallback, "using fallback slug");
        fallback
    } else {
        normalized
    };

    let mut candidate = base.clone();
    for attempt in 1..=MAX_ATTEMPTS {
        if is_available(&candidate)
            .await
            .map_err(SlugResolveError::Oracle)?
        {
            return Ok(candidate);
        }
        candidate = format!("{base}-{attempt}");
    }

    tracing::warn!(base = %base, attempts = MAX_ATTEMPTS, "slug candidates exhausted");
    Err(SlugError::Exhausted {
        base,
        attempts: MAX_ATTEMPTS,
    }
    .into())
}
