// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone)]
pub struct DummyClock;

impl sluggable::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        crate::support::mocks::time::fixed_now()
    }
}

/// Hands out `token-1`, `token-2`, ... so fallback slugs are predictable.
#[derive(Default)]
pub struct SequenceTokens {
    issued: AtomicUsize,
}

impl SequenceTokens {
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

impl sluggable::application::ports::util::TokenGenerator for SequenceTokens {
    fn random_token(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        format!("token-{n}")
    }
}
