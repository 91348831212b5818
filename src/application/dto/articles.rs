use crate::application::error::ApplicationError;
use crate::domain::article::Article;
use crate::domain::record::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Model<Article>> for ArticleDto {
    type Error = ApplicationError;

    fn try_from(model: Model<Article>) -> Result<Self, Self::Error> {
        let id = model
            .key()
            .ok_or_else(|| ApplicationError::infrastructure("article has not been persisted"))?;
        let article = model.into_attributes();
        Ok(Self {
            id: id.into(),
            title: article.title.into(),
            slug: article.slug.map(Into::into),
            body: article.body.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        })
    }
}
