// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::Record;
use crate::domain::slug::SlugConfig;
use chrono::{DateTime, Utc};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: ArticleTitle,
    pub slug: Option<ArticleSlug>,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub const fn new(title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) -> Self {
        Self {
            title,
            slug: None,
            body,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_content(
        &mut self,
        title: Option<ArticleTitle>,
        body: Option<ArticleBody>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        self.updated_at = now;
    }
}

fn required(field: &str, value: Option<String>) -> DomainResult<String> {
    value.ok_or_else(|| DomainError::Validation(format!("{field} cannot be null")))
}

impl Record for Article {
    const TABLE: &'static str = "articles";
    const SLUG: SlugConfig = SlugConfig::new("title", "slug");

    fn read_field(&self, name: &str) -> DomainResult<Option<Cow<'_, str>>> {
        match name {
            "title" => Ok(Some(Cow::Borrowed(self.title.as_str()))),
            "slug" => Ok(self.slug.as_ref().map(|slug| Cow::Borrowed(slug.as_str()))),
            "body" => Ok(Some(Cow::Borrowed(self.body.as_str()))),
            other => Err(DomainError::unknown_field(Self::TABLE, other)),
        }
    }

    fn write_field(&mut self, name: &str, value: Option<String>) -> DomainResult<()> {
        match name {
            "title" => self.title = ArticleTitle::new(required(name, value)?)?,
            "slug" => self.slug = value.map(ArticleSlug::new).transpose()?,
            "body" => self.body = ArticleBody::new(required(name, value)?)?,
            other => return Err(DomainError::unknown_field(Self::TABLE, other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article::new(
            ArticleTitle::new("title").unwrap(),
            ArticleBody::new("body").unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn new_article_has_no_slug() {
        let article = sample_article();
        assert!(article.read_field("slug").unwrap().is_none());
        assert_eq!(article.read_field("title").unwrap().as_deref(), Some("title"));
    }

    #[test]
    fn set_content_updates_fields() {
        let mut article = sample_article();
        let later = article.updated_at + chrono::Duration::seconds(10);
        article.set_content(Some(ArticleTitle::new("new title").unwrap()), None, later);
        assert_eq!(article.title.as_str(), "new title");
        assert_eq!(article.body.as_str(), "body");
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn write_field_validates_values() {
        let mut article = sample_article();
        assert!(matches!(
            article.write_field("title", None),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            article.write_field("slug", Some("  ".into())),
            Err(DomainError::Validation(_))
        ));
        article.write_field("slug", None).unwrap();
        assert!(article.slug.is_none());
        assert!(matches!(
            article.write_field("author", Some("x".into())),
            Err(DomainError::Configuration(_))
        ));
    }
}
