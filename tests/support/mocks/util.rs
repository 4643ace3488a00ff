// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone, Default)]
pub struct DummyClock;

impl folio_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Lowercases and joins words with `-`; enough for predictable test slugs.
#[derive(Clone, Default)]
pub struct DummySlug;

impl folio_core::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
