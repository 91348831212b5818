// src/domain/record/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::record::model::{Model, Record, RecordId};
use crate::domain::record::store::RecordStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Callback run immediately before a model is inserted or updated.
#[async_trait]
pub trait SavingHook<R: Record>: Send + Sync {
    async fn saving(&self, model: &mut Model<R>) -> DomainResult<()>;
}

/// Save pipeline for one record type: registered hooks, then the store write.
pub struct Repository<R: Record> {
    store: Arc<dyn RecordStore<R>>,
    saving: Vec<Arc<dyn SavingHook<R>>>,
}

impl<R: Record> Repository<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self {
            store,
            saving: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_saving_hook(mut self, hook: Arc<dyn SavingHook<R>>) -> Self {
        self.saving.push(hook);
        self
    }

    pub fn store(&self) -> &Arc<dyn RecordStore<R>> {
        &self.store
    }

    pub async fn find_by_key(&self, key: RecordId) -> DomainResult<Option<Model<R>>> {
        self.store.find_by_key(key).await
    }

    pub async fn save(&self, model: &mut Model<R>) -> DomainResult<RecordId> {
        for hook in &self.saving {
            hook.saving(model).await?;
        }

        let key = match model.key() {
            Some(key) => {
                self.store.update(key, model.attributes()).await?;
                key
            }
            None => self.store.insert(model.attributes()).await?,
        };

        model.sync_persisted(key);
        tracing::debug!(table = R::TABLE, %key, "record saved");
        Ok(key)
    }
}
