// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{GetArticleBySlugQuery, GetArticleQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub slug: Option<String>,
    #[serde(default)]
    pub regenerate_slug: bool,
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        slug: payload.slug,
    };
    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// `{key}` is bound through the slug manager: canonical integers address
/// the primary key, anything else is a slug.
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(key): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .article_queries
        .get_article(GetArticleQuery { key })
        .await
        .into_http()?;
    Ok(Json(article))
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Json(article))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(key): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        key,
        title: payload.title,
        body: payload.body,
        slug: payload.slug,
        regenerate_slug: payload.regenerate_slug,
    };
    let article = state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;
    Ok(Json(article))
}
