use std::sync::Arc;

use crate::domain::{article::Article, slug::SlugManager};

pub struct ArticleQueryService {
    pub(super) slugs: Arc<SlugManager<Article>>,
}

impl ArticleQueryService {
    pub fn new(slugs: Arc<SlugManager<Article>>) -> Self {
        Self { slugs }
    }
}
