// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ClockPort, SlugGeneratorPort, TokenGeneratorPort},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::Article,
        record::{RecordStore, Repository, SavingHook},
        slug::SlugManager,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    article_slugs: Arc<SlugManager<Article>>,
}

impl ApplicationServices {
    pub fn new(
        article_store: Arc<dyn RecordStore<Article>>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        tokens: Arc<TokenGeneratorPort>,
    ) -> Self {
        let article_slugs = Arc::new(SlugManager::new(
            Arc::clone(&article_store),
            Arc::clone(&slugger),
            Arc::clone(&tokens),
        ));

        let slug_hook: Arc<dyn SavingHook<Article>> = Arc::clone(&article_slugs) as _;
        let article_repository =
            Arc::new(Repository::new(Arc::clone(&article_store)).with_saving_hook(slug_hook));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repository),
            Arc::clone(&article_slugs),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_slugs)));

        Self {
            article_commands,
            article_queries,
            article_slugs,
        }
    }

    pub fn article_slugs(&self) -> Arc<SlugManager<Article>> {
        Arc::clone(&self.article_slugs)
    }
}
