use super::error::map_sqlx;
use crate::domain::article::{Article, ArticleBody, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{FieldFilter, Model, Record, RecordId, RecordStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const SELECT_ARTICLE: &str =
    "SELECT id, title, slug, body, created_at, updated_at FROM articles";
const SELECT_ARTICLE_BY_ID: &str =
    "SELECT id, title, slug, body, created_at, updated_at FROM articles WHERE id = ?";

/// Columns a `FieldFilter` may target. Field names come from record
/// configuration, so anything else is rejected before it reaches SQL.
const FILTERABLE_COLUMNS: &[&str] = &["title", "slug", "body"];

#[derive(Clone)]
pub struct SqliteArticleStore {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleStore {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: Option<String>,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Model<Article> {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let article = Article {
            title: ArticleTitle::new(row.title)?,
            slug: row.slug.map(ArticleSlug::new).transpose()?,
            body: ArticleBody::new(row.body)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };
        Ok(Self::loaded(RecordId::new(row.id)?, article))
    }
}

fn filtered_query<'a>(
    prefix: &str,
    filter: &'a FieldFilter,
) -> DomainResult<QueryBuilder<'a, Sqlite>> {
    if !FILTERABLE_COLUMNS.contains(&filter.field) {
        return Err(DomainError::unknown_field(Article::TABLE, filter.field));
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(prefix);
    builder.push(" WHERE ");
    builder.push(filter.field);
    builder.push(" = ");
    builder.push_bind(filter.value.as_str());
    if let Some(key) = filter.exclude_key {
        builder.push(" AND id <> ");
        builder.push_bind(i64::from(key));
    }
    Ok(builder)
}

#[async_trait]
impl RecordStore<Article> for SqliteArticleStore {
    async fn exists(&self, filter: &FieldFilter) -> DomainResult<bool> {
        let mut builder = filtered_query("SELECT COUNT(1) FROM articles", filter)?;
        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count > 0)
    }

    async fn find_one(&self, filter: &FieldFilter) -> DomainResult<Option<Model<Article>>> {
        let mut builder = filtered_query(SELECT_ARTICLE, filter)?;
        builder.push(" ORDER BY id LIMIT 1");
        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Model::try_from).transpose()
    }

    async fn find_by_key(&self, key: RecordId) -> DomainResult<Option<Model<Article>>> {
        let row = sqlx::query_as::<_, ArticleRow>(SELECT_ARTICLE_BY_ID)
            .bind(i64::from(key))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Model::try_from).transpose()
    }

    async fn insert(&self, article: &Article) -> DomainResult<RecordId> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, slug, body, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(article.title.as_str())
        .bind(article.slug.as_ref().map(ArticleSlug::as_str))
        .bind(article.body.as_str())
        .bind(article.created_at)
        .bind(article.updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        RecordId::new(id)
    }

    async fn update(&self, key: RecordId, article: &Article) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET title = ?, slug = ?, body = ?, updated_at = ? WHERE id = ?",
        )
        .bind(article.title.as_str())
        .bind(article.slug.as_ref().map(ArticleSlug::as_str))
        .bind(article.body.as_str())
        .bind(article.updated_at)
        .bind(i64::from(key))
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("key", key.to_string()));
        }
        Ok(())
    }
}
