use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::errors::DomainError,
};

/// Route-style lookup: `key` is a primary key or a slug.
pub struct GetArticleQuery {
    pub key: String,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let model = self
            .slugs
            .resolve_route_binding(&query.key)
            .await?
            .ok_or_else(|| DomainError::not_found("key or slug", query.key))?;
        ArticleDto::try_from(model)
    }
}
