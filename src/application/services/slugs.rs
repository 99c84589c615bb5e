// src/application/services/slugs.rs
use std::{future::Future, sync::Arc};

use crate::{
    application::ports::time::Clock,
    domain::{
        errors::{DomainError, DomainResult},
        slug::{Slug, generate_unique_slug_at},
    },
};

/// Entity whose slug is being assigned; selects the fallback prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugKind {
    Post,
    Category,
    Tag,
}

impl SlugKind {
    pub fn fallback_prefix(self) -> &'static str {
        match self {
            SlugKind::Post => "post",
            SlugKind::Category => "category",
            SlugKind::Tag => "tag",
        }
    }
}

/// Assigns unique slugs for command services and retries writes that lose
/// the check-then-insert race against the storage unique constraint.
pub struct SlugService {
    clock: Arc<dyn Clock>,
    write_attempts: u32,
}

impl SlugService {
    pub fn new(clock: Arc<dyn Clock>, write_attempts: u32) -> Self {
        Self {
            clock,
            write_attempts: write_attempts.max(1),
        }
    }

    /// Resolve a slug for `text` that `is_available` accepts. Oracle errors
    /// are returned unchanged.
    pub async fn resolve<F, Fut>(
        &self,
        text: &str,
        kind: SlugKind,
        is_available: F,
    ) -> DomainResult<Slug>
    where
        F: FnMut(&str) -> Fut,
        Fut: Future<Output = DomainResult<bool>>,
    {
        let raw = generate_unique_slug_at(
            text,
            is_available,
            kind.fallback_prefix(),
            self.clock.now(),
        )
        .await?;
        Slug::new(raw)
    }

    /// Resolve a slug and hand it to `write`. When the write reports
    /// [`DomainError::SlugTaken`] the slug is resolved again and the write
    /// repeated, up to the configured number of attempts.
    pub async fn persist_with_slug<T, F, Fut, W, WFut>(
        &self,
        text: &str,
        kind: SlugKind,
        mut is_available: F,
        mut write: W,
    ) -> DomainResult<T>
    where
        F: FnMut(&str) -> Fut,
        Fut: Future<Output = DomainResult<bool>>,
        W: FnMut(Slug) -> WFut,
        WFut: Future<Output = DomainResult<T>>,
    {
        let mut attempt = 1;
        loop {
            let slug = self.resolve(text, kind, &mut is_available).await?;
            match write(slug.clone()).await {
                Err(DomainError::SlugTaken(detail)) if attempt < self.write_attempts => {
                    tracing::warn!(
                        ?kind,
                        slug = %slug,
                        attempt,
                        detail = %detail,
                        "slug claimed concurrently, resolving again"
                    );
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn service(attempts: u32) -> SlugService {
        let clock = FixedClock(DateTime::from_timestamp_millis(1_700_000_000_000).unwrap());
        SlugService::new(Arc::new(clock), attempts)
    }

    #[tokio::test]
    async fn fallback_prefix_follows_kind() {
        let slug = service(1)
            .resolve("タグ", SlugKind::Tag, |_| async { Ok(true) })
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "tag-1700000000000");
    }

    #[tokio::test]
    async fn write_conflict_triggers_fresh_resolution() {
        // Storage already holds "rust" although the first oracle check missed it.
        let stored = Mutex::new(vec![]);
        let checks = Mutex::new(0u32);
        let svc = service(3);

        let slug = svc
            .persist_with_slug(
                "Rust",
                SlugKind::Post,
                |candidate: &str| {
                    let mut n = checks.lock().unwrap();
                    *n += 1;
                    let free = *n == 1 || candidate != "rust";
                    async move { Ok(free) }
                },
                |slug: Slug| {
                    let result = if slug.as_str() == "rust" {
                        Err(DomainError::SlugTaken("posts.slug".into()))
                    } else {
                        stored.lock().unwrap().push(slug.clone());
                        Ok(slug)
                    };
                    async move { result }
                },
            )
            .await
            .unwrap();

        assert_eq!(slug.as_str(), "rust-1");
        assert_eq!(stored.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn gives_up_after_configured_attempts() {
        let writes = Mutex::new(0u32);
        let err = service(2)
            .persist_with_slug(
                "Rust",
                SlugKind::Post,
                |_| async { Ok(true) },
                |_slug: Slug| {
                    *writes.lock().unwrap() += 1;
                    async { Err::<(), _>(DomainError::SlugTaken("posts.slug".into())) }
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::SlugTaken(_)));
        assert_eq!(*writes.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn other_write_errors_are_not_retried() {
        let writes = Mutex::new(0u32);
        let err = service(5)
            .persist_with_slug(
                "Rust",
                SlugKind::Category,
                |_| async { Ok(true) },
                |_slug: Slug| {
                    *writes.lock().unwrap() += 1;
                    async { Err::<(), _>(DomainError::Conflict("name".into())) }
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(*writes.lock().unwrap(), 1);
    }
}
