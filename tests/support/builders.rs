// tests/support/builders.rs
use std::borrow::Cow;
use std::sync::Arc;

use sluggable::domain::errors::{DomainError, DomainResult};
use sluggable::domain::record::{Model, Record, RecordStore, Repository, SavingHook};
use sluggable::domain::slug::{SlugConfig, SlugManager};
use sluggable::infrastructure::util::DefaultSlugGenerator;

use super::mocks::SequenceTokens;

fn read_text<'a>(
    table: &str,
    name: &str,
    fields: [(&str, &'a Option<String>); 2],
) -> DomainResult<Option<Cow<'a, str>>> {
    fields
        .into_iter()
        .find(|(field, _)| *field == name)
        .map(|(_, value)| value.as_deref().map(Cow::Borrowed))
        .ok_or_else(|| DomainError::unknown_field(table, name))
}

/// Record with the default `name` / `slug` fields and a non-nullable slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl Category {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.into()),
            slug: None,
        }
    }

    pub fn with_slug(name: &str, slug: &str) -> Self {
        Self {
            name: Some(name.into()),
            slug: Some(slug.into()),
        }
    }
}

impl Record for Category {
    const TABLE: &'static str = "categories";

    fn read_field(&self, name: &str) -> DomainResult<Option<Cow<'_, str>>> {
        read_text(Self::TABLE, name, [("name", &self.name), ("slug", &self.slug)])
    }

    fn write_field(&mut self, name: &str, value: Option<String>) -> DomainResult<()> {
        match name {
            "name" => self.name = value,
            "slug" => self.slug = value,
            other => return Err(DomainError::unknown_field(Self::TABLE, other)),
        }
        Ok(())
    }
}

/// Record whose slug may stay null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub label: Option<String>,
    pub handle: Option<String>,
}

impl Record for Tag {
    const TABLE: &'static str = "tags";
    const SLUG: SlugConfig = SlugConfig::new("label", "handle").nullable();

    fn read_field(&self, name: &str) -> DomainResult<Option<Cow<'_, str>>> {
        read_text(Self::TABLE, name, [("label", &self.label), ("handle", &self.handle)])
    }

    fn write_field(&mut self, name: &str, value: Option<String>) -> DomainResult<()> {
        match name {
            "label" => self.label = value,
            "handle" => self.handle = value,
            other => return Err(DomainError::unknown_field(Self::TABLE, other)),
        }
        Ok(())
    }
}

/// Record that numbers its retries `base_2`, `base_3`, ...
#[derive(Debug, Clone, Default)]
pub struct Snippet {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl Snippet {
    pub fn with_slug(name: &str, slug: &str) -> Self {
        Self {
            name: Some(name.into()),
            slug: Some(slug.into()),
        }
    }
}

impl Record for Snippet {
    const TABLE: &'static str = "snippets";

    fn read_field(&self, name: &str) -> DomainResult<Option<Cow<'_, str>>> {
        read_text(Self::TABLE, name, [("name", &self.name), ("slug", &self.slug)])
    }

    fn write_field(&mut self, name: &str, value: Option<String>) -> DomainResult<()> {
        match name {
            "name" => self.name = value,
            "slug" => self.slug = value,
            other => return Err(DomainError::unknown_field(Self::TABLE, other)),
        }
        Ok(())
    }

    fn suggest_unique_slug(base: &str, attempt: u64, _previous: &str) -> String {
        format!("{base}_{}", attempt + 1)
    }
}

/// Record whose configuration names a field it does not have.
#[derive(Debug, Clone, Default)]
pub struct Misconfigured {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl Record for Misconfigured {
    const TABLE: &'static str = "misconfigured";
    const SLUG: SlugConfig = SlugConfig::new("title", "slug");

    fn read_field(&self, name: &str) -> DomainResult<Option<Cow<'_, str>>> {
        read_text(Self::TABLE, name, [("name", &self.name), ("slug", &self.slug)])
    }

    fn write_field(&mut self, name: &str, value: Option<String>) -> DomainResult<()> {
        match name {
            "name" => self.name = value,
            "slug" => self.slug = value,
            other => return Err(DomainError::unknown_field(Self::TABLE, other)),
        }
        Ok(())
    }
}

pub fn slug_manager<R: Record>(store: Arc<dyn RecordStore<R>>) -> SlugManager<R> {
    SlugManager::new(
        store,
        Arc::new(DefaultSlugGenerator),
        Arc::new(SequenceTokens::default()),
    )
}

/// Save pipeline with the slug manager registered as its saving hook.
pub fn sluggable_repository<R: Record>(
    store: Arc<dyn RecordStore<R>>,
) -> (Repository<R>, Arc<SlugManager<R>>) {
    let manager = Arc::new(slug_manager(Arc::clone(&store)));
    let hook: Arc<dyn SavingHook<R>> = Arc::clone(&manager) as _;
    (Repository::new(store).with_saving_hook(hook), manager)
}

/// Insert rows directly, bypassing any hooks.
pub async fn seed<R: Record>(store: &dyn RecordStore<R>, records: impl IntoIterator<Item = R>) {
    for record in records {
        store.insert(&record).await.expect("seed insert");
    }
}

pub fn new_model<R: Record>(record: R) -> Model<R> {
    Model::new(record)
}
