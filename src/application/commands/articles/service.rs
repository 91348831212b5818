// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::Article,
        record::{Model, Repository},
        slug::SlugManager,
    },
};

pub struct ArticleCommandService {
    pub(super) repository: Arc<Repository<Article>>,
    pub(super) slugs: Arc<SlugManager<Article>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        repository: Arc<Repository<Article>>,
        slugs: Arc<SlugManager<Article>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            slugs,
            clock,
        }
    }

    /// Write a caller-chosen slug into the model after checking that its
    /// normalized form is free. The saving hook still normalizes it.
    pub(super) async fn apply_requested_slug(
        &self,
        model: &mut Model<Article>,
        requested: &str,
    ) -> ApplicationResult<()> {
        let normalized = self.slugs.normalize(requested);
        if normalized.is_empty() {
            return Err(ApplicationError::validation(
                "slug must contain at least one letter or digit",
            ));
        }

        let rule = self.slugs.unique_validation_rule(model);
        if !rule
            .passes(self.repository.store().as_ref(), &normalized)
            .await?
        {
            tracing::debug!(%rule, slug = %normalized, "requested slug rejected");
            return Err(ApplicationError::conflict(format!(
                "slug `{normalized}` is already taken"
            )));
        }

        model.set_field(self.slugs.slug_field_name(), Some(normalized))?;
        Ok(())
    }
}
