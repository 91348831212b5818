// src/domain/record/model.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::SlugConfig;
use std::borrow::Cow;
use std::fmt;

/// Primary key assigned by a record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persistent record type that can carry a slug.
///
/// Field access is by name so that `SlugConfig` can point at any text field
/// of the type. Implementations match on the names they know and return
/// [`DomainError::unknown_field`] for anything else.
pub trait Record: Clone + Send + Sync + 'static {
    const TABLE: &'static str;
    const KEY_NAME: &'static str = "id";
    const SLUG: SlugConfig = SlugConfig::DEFAULT;

    fn read_field(&self, name: &str) -> DomainResult<Option<Cow<'_, str>>>;

    fn write_field(&mut self, name: &str, value: Option<String>) -> DomainResult<()>;

    /// Candidate tried after `previous` turned out to be taken. `attempt`
    /// counts from 1 for the first retry.
    fn suggest_unique_slug(base: &str, attempt: u64, _previous: &str) -> String {
        format!("{base}-{attempt}")
    }
}

/// In-memory instance of a record, tracking its key, the last persisted
/// attribute snapshot and whether a slug was already assigned in this
/// lifetime.
#[derive(Debug, Clone)]
pub struct Model<R> {
    key: Option<RecordId>,
    attributes: R,
    original: Option<R>,
    slugified: bool,
}

impl<R: Record> Model<R> {
    pub const fn new(attributes: R) -> Self {
        Self {
            key: None,
            attributes,
            original: None,
            slugified: false,
        }
    }

    /// Build a model for a row read back from a store.
    pub fn loaded(key: RecordId, attributes: R) -> Self {
        Self {
            key: Some(key),
            original: Some(attributes.clone()),
            attributes,
            slugified: false,
        }
    }

    pub const fn key(&self) -> Option<RecordId> {
        self.key
    }

    pub const fn exists(&self) -> bool {
        self.key.is_some()
    }

    pub const fn attributes(&self) -> &R {
        &self.attributes
    }

    pub const fn attributes_mut(&mut self) -> &mut R {
        &mut self.attributes
    }

    pub fn into_attributes(self) -> R {
        self.attributes
    }

    pub fn get(&self, field: &str) -> DomainResult<Option<Cow<'_, str>>> {
        self.attributes.read_field(field)
    }

    pub fn set_field(&mut self, field: &str, value: Option<String>) -> DomainResult<()> {
        self.attributes.write_field(field, value)
    }

    /// Whether `field` differs from the last persisted value. Unsaved models
    /// report every populated field as dirty.
    pub fn is_dirty(&self, field: &str) -> DomainResult<bool> {
        let current = self.attributes.read_field(field)?;
        match &self.original {
            Some(original) => Ok(current != original.read_field(field)?),
            None => Ok(current.is_some()),
        }
    }

    pub const fn is_slugified(&self) -> bool {
        self.slugified
    }

    pub fn slug(&self) -> DomainResult<Option<Cow<'_, str>>> {
        self.attributes.read_field(R::SLUG.slug_field)
    }

    pub fn slug_source(&self) -> DomainResult<Option<Cow<'_, str>>> {
        self.attributes.read_field(R::SLUG.source_field)
    }

    /// Assign the slug verbatim. The saving hook leaves it alone afterwards.
    pub fn set_slug(&mut self, value: Option<String>) -> DomainResult<()> {
        self.attributes.write_field(R::SLUG.slug_field, value)?;
        self.slugified = true;
        Ok(())
    }

    pub(crate) fn sync_persisted(&mut self, key: RecordId) {
        self.key = Some(key);
        self.original = Some(self.attributes.clone());
    }
}
