mod get_by_key;
mod get_by_slug;
mod service;

pub use get_by_key::GetArticleQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use service::ArticleQueryService;
