// src/infrastructure/repositories/memory.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{FieldFilter, Model, Record, RecordId, RecordStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

struct Rows<R> {
    next_id: i64,
    rows: BTreeMap<RecordId, R>,
}

/// Process-local store keeping rows in key order. Keys start at 1.
pub struct InMemoryRecordStore<R> {
    inner: Mutex<Rows<R>>,
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Rows {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.lock()?.rows.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.lock()?.rows.is_empty())
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Rows<R>>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store lock poisoned".into()))
    }

    fn first_match(rows: &Rows<R>, filter: &FieldFilter) -> DomainResult<Option<Model<R>>> {
        for (key, record) in &rows.rows {
            if filter.exclude_key == Some(*key) {
                continue;
            }
            if record.read_field(filter.field)?.as_deref() == Some(filter.value.as_str()) {
                return Ok(Some(Model::loaded(*key, record.clone())));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn exists(&self, filter: &FieldFilter) -> DomainResult<bool> {
        let rows = self.lock()?;
        Ok(Self::first_match(&rows, filter)?.is_some())
    }

    async fn find_one(&self, filter: &FieldFilter) -> DomainResult<Option<Model<R>>> {
        let rows = self.lock()?;
        Self::first_match(&rows, filter)
    }

    async fn find_by_key(&self, key: RecordId) -> DomainResult<Option<Model<R>>> {
        let rows = self.lock()?;
        Ok(rows
            .rows
            .get(&key)
            .map(|record| Model::loaded(key, record.clone())))
    }

    async fn insert(&self, record: &R) -> DomainResult<RecordId> {
        let mut rows = self.lock()?;
        let key = RecordId(rows.next_id);
        rows.next_id += 1;
        rows.rows.insert(key, record.clone());
        Ok(key)
    }

    async fn update(&self, key: RecordId, record: &R) -> DomainResult<()> {
        let mut rows = self.lock()?;
        let slot = rows
            .rows
            .get_mut(&key)
            .ok_or_else(|| DomainError::not_found("key", key.to_string()))?;
        *slot = record.clone();
        Ok(())
    }
}
