// src/domain/slug/rule.rs
use crate::domain::errors::DomainResult;
use crate::domain::record::{FieldFilter, Model, Record, RecordId, RecordStore};
use std::fmt;

/// "Slug must be unique in this table, ignoring the record itself."
///
/// Renders in the `unique:table,column[,ignore_key,key_column]` form used by
/// declarative validators and can also be evaluated against a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueRule {
    table: &'static str,
    column: &'static str,
    ignore: Option<(RecordId, &'static str)>,
}

impl UniqueRule {
    pub fn for_model<R: Record>(model: &Model<R>) -> Self {
        Self {
            table: R::TABLE,
            column: R::SLUG.slug_field,
            ignore: model.key().map(|key| (key, R::KEY_NAME)),
        }
    }

    pub const fn table(&self) -> &'static str {
        self.table
    }

    pub const fn column(&self) -> &'static str {
        self.column
    }

    pub fn ignored_key(&self) -> Option<RecordId> {
        self.ignore.map(|(key, _)| key)
    }

    pub async fn passes<R: Record>(
        &self,
        store: &dyn RecordStore<R>,
        value: &str,
    ) -> DomainResult<bool> {
        let filter = FieldFilter::equals(self.column, value).excluding(self.ignored_key());
        Ok(!store.exists(&filter).await?)
    }
}

impl fmt::Display for UniqueRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unique:{},{}", self.table, self.column)?;
        if let Some((key, key_name)) = self.ignore {
            write!(f, ",{key},{key_name}")?;
        }
        Ok(())
    }
}
