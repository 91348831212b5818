// src/domain/record/store.rs
use crate::domain::errors::DomainResult;
use crate::domain::record::model::{Model, Record, RecordId};
use async_trait::async_trait;

/// "`field` equals `value`", optionally ignoring the record with `exclude_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: &'static str,
    pub value: String,
    pub exclude_key: Option<RecordId>,
}

impl FieldFilter {
    pub fn equals(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            exclude_key: None,
        }
    }

    #[must_use]
    pub const fn excluding(mut self, key: Option<RecordId>) -> Self {
        self.exclude_key = key;
        self
    }
}

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn exists(&self, filter: &FieldFilter) -> DomainResult<bool>;
    async fn find_one(&self, filter: &FieldFilter) -> DomainResult<Option<Model<R>>>;
    async fn find_by_key(&self, key: RecordId) -> DomainResult<Option<Model<R>>>;
    async fn insert(&self, record: &R) -> DomainResult<RecordId>;
    async fn update(&self, key: RecordId, record: &R) -> DomainResult<()>;
}
