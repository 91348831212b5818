use crate::domain::errors::DomainError;

const COL_ARTICLE_SLUG: &str = "articles.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                if db_err.message().contains(COL_ARTICLE_SLUG) {
                    return DomainError::Conflict("slug already exists".into());
                }
                return DomainError::Conflict("unique constraint violated".into());
            }
            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
