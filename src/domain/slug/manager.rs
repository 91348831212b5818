// src/domain/slug/manager.rs
use std::borrow::Cow;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::{SlugGenerator, TokenGenerator};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{FieldFilter, Model, Record, RecordStore, SavingHook};
use crate::domain::slug::lookup::{LookupKey, parse_canonical_key};
use crate::domain::slug::rule::UniqueRule;

/// Domain service that keeps the slugs of one record type unique and
/// resolves records by slug or primary key.
///
/// Register it on the type's [`crate::domain::record::Repository`] so the
/// saving hook runs before every write.
pub struct SlugManager<R: Record> {
    store: Arc<dyn RecordStore<R>>,
    slugger: Arc<dyn SlugGenerator>,
    tokens: Arc<dyn TokenGenerator>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> SlugManager<R> {
    pub fn new(
        store: Arc<dyn RecordStore<R>>,
        slugger: Arc<dyn SlugGenerator>,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            store,
            slugger,
            tokens,
            _record: PhantomData,
        }
    }

    pub const fn source_field_name(&self) -> &'static str {
        R::SLUG.source_field
    }

    pub const fn slug_field_name(&self) -> &'static str {
        R::SLUG.slug_field
    }

    pub const fn is_nullable(&self) -> bool {
        R::SLUG.nullable
    }

    /// Run `text` through the slugifier without any uniqueness check.
    pub fn normalize(&self, text: &str) -> String {
        self.slugger.slugify(text)
    }

    /// Compute a unique slug for `model` without modifying it.
    ///
    /// The current slug wins over the source text. With neither usable the
    /// result is `None` for nullable types, otherwise the primary key or a
    /// random token stands in. Taken slugs are retried with
    /// [`Record::suggest_unique_slug`] (`-1`, `-2`, ... by default) until one
    /// is free.
    pub async fn generate_slug(&self, model: &Model<R>) -> DomainResult<Option<String>> {
        let Some(base) = self.slug_base(model)? else {
            return Ok(None);
        };

        let mut candidate = base.clone();
        let mut attempt = 0u64;
        while !self.is_slug_unique(&candidate, model).await? {
            attempt += 1;
            tracing::debug!(table = R::TABLE, slug = %candidate, "slug taken");
            candidate = R::suggest_unique_slug(&base, attempt, &candidate);
        }

        Ok(Some(candidate))
    }

    /// Assign a freshly generated slug to `model`. Does not persist.
    pub async fn slugify<'m>(&self, model: &'m mut Model<R>) -> DomainResult<&'m mut Model<R>> {
        let slug = self.generate_slug(model).await?;
        tracing::info!(table = R::TABLE, key = ?model.key(), slug = ?slug, "slug assigned");
        model.set_slug(slug)?;
        Ok(model)
    }

    pub async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Model<R>>> {
        let filter = FieldFilter::equals(self.slug_field_name(), slug);
        self.store.find_one(&filter).await
    }

    pub async fn find_by_slug_or_fail(&self, slug: &str) -> DomainResult<Model<R>> {
        self.find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::not_found("slug", slug))
    }

    /// Look a record up by primary key when `key` is one (or is text that
    /// round-trips as an integer), otherwise by slug.
    pub async fn find_by_any(&self, key: impl Into<LookupKey>) -> DomainResult<Option<Model<R>>> {
        match key.into() {
            LookupKey::Key(id) => self.store.find_by_key(id).await,
            LookupKey::Text(text) => match parse_canonical_key(&text) {
                Some(id) => self.store.find_by_key(id).await,
                None => self.find_by_slug(&text).await,
            },
        }
    }

    pub async fn find_by_any_or_fail(&self, key: impl Into<LookupKey>) -> DomainResult<Model<R>> {
        let key = key.into();
        let shown = key.to_string();
        self.find_by_any(key)
            .await?
            .ok_or_else(|| DomainError::not_found("key or slug", shown))
    }

    /// Field that route segments are matched against.
    pub const fn route_key_name(&self) -> &'static str {
        self.slug_field_name()
    }

    pub async fn resolve_route_binding(&self, value: &str) -> DomainResult<Option<Model<R>>> {
        self.find_by_any(value).await
    }

    pub fn unique_validation_rule(&self, model: &Model<R>) -> UniqueRule {
        UniqueRule::for_model(model)
    }

    fn slug_base(&self, model: &Model<R>) -> DomainResult<Option<String>> {
        let base = [model.slug()?, model.slug_source()?]
            .into_iter()
            .filter_map(non_blank)
            .map(|text| self.slugger.slugify(&text))
            .find(|base| !base.is_empty());
        if base.is_some() {
            return Ok(base);
        }
        if self.is_nullable() {
            return Ok(None);
        }

        let fallback = model
            .key()
            .map_or_else(|| self.tokens.random_token(), |key| key.to_string());
        Ok(Some(self.slugger.slugify(&fallback)))
    }

    async fn is_slug_unique(&self, slug: &str, model: &Model<R>) -> DomainResult<bool> {
        let filter = FieldFilter::equals(self.slug_field_name(), slug).excluding(model.key());
        Ok(!self.store.exists(&filter).await?)
    }
}

fn non_blank(value: Option<Cow<'_, str>>) -> Option<String> {
    value
        .filter(|text| !text.trim().is_empty())
        .map(Cow::into_owned)
}

#[async_trait]
impl<R: Record> SavingHook<R> for SlugManager<R> {
    async fn saving(&self, model: &mut Model<R>) -> DomainResult<()> {
        if model.is_slugified() {
            tracing::debug!(table = R::TABLE, "slug already assigned in this lifetime");
            return Ok(());
        }
        if model.exists() && !model.is_dirty(self.slug_field_name())? {
            return Ok(());
        }

        self.slugify(model).await?;
        Ok(())
    }
}
