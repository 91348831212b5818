// tests/support/mocks/store.rs
use async_trait::async_trait;
use sluggable::domain::errors::{DomainError, DomainResult};
use sluggable::domain::record::{FieldFilter, Model, Record, RecordId, RecordStore};
use sluggable::infrastructure::repositories::InMemoryRecordStore;
use std::sync::Mutex;

/// In-memory store that records every call in order.
pub struct CountingStore<R> {
    inner: InMemoryRecordStore<R>,
    calls: Mutex<Vec<String>>,
}

impl<R: Record> Default for CountingStore<R> {
    fn default() -> Self {
        Self {
            inner: InMemoryRecordStore::new(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl<R: Record> CountingStore<R> {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn exists_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with("exists"))
            .count()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for CountingStore<R> {
    async fn exists(&self, filter: &FieldFilter) -> DomainResult<bool> {
        self.record(format!("exists {}={}", filter.field, filter.value));
        self.inner.exists(filter).await
    }

    async fn find_one(&self, filter: &FieldFilter) -> DomainResult<Option<Model<R>>> {
        self.record(format!("find_one {}={}", filter.field, filter.value));
        self.inner.find_one(filter).await
    }

    async fn find_by_key(&self, key: RecordId) -> DomainResult<Option<Model<R>>> {
        self.record(format!("find_by_key {key}"));
        self.inner.find_by_key(key).await
    }

    async fn insert(&self, record: &R) -> DomainResult<RecordId> {
        self.record("insert".into());
        self.inner.insert(record).await
    }

    async fn update(&self, key: RecordId, record: &R) -> DomainResult<()> {
        self.record(format!("update {key}"));
        self.inner.update(key, record).await
    }
}

/// Store whose every call fails, for error propagation checks.
pub struct FailingStore;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("store unavailable".into()))
}

#[async_trait]
impl<R: Record> RecordStore<R> for FailingStore {
    async fn exists(&self, _filter: &FieldFilter) -> DomainResult<bool> {
        unavailable()
    }

    async fn find_one(&self, _filter: &FieldFilter) -> DomainResult<Option<Model<R>>> {
        unavailable()
    }

    async fn find_by_key(&self, _key: RecordId) -> DomainResult<Option<Model<R>>> {
        unavailable()
    }

    async fn insert(&self, _record: &R) -> DomainResult<RecordId> {
        unavailable()
    }

    async fn update(&self, _key: RecordId, _record: &R) -> DomainResult<()> {
        unavailable()
    }
}
