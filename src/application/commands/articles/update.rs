// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleBody, ArticleTitle},
};

#[derive(Default)]
pub struct UpdateArticleCommand {
    /// Primary key or slug of the article to edit.
    pub key: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub slug: Option<String>,
    /// Drop the current slug so it is derived from the title again.
    pub regenerate_slug: bool,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            key,
            title,
            body,
            slug,
            regenerate_slug,
        } = command;

        if slug.is_some() && regenerate_slug {
            return Err(ApplicationError::validation(
                "an explicit slug cannot be combined with regenerate_slug",
            ));
        }

        let mut model = self.slugs.find_by_any_or_fail(key).await?;

        let title = title.map(ArticleTitle::new).transpose()?;
        let body = body.map(ArticleBody::new).transpose()?;
        if title.is_some() || body.is_some() {
            let now = self.clock.now();
            model.attributes_mut().set_content(title, body, now);
        }

        if let Some(slug) = slug.as_deref() {
            self.apply_requested_slug(&mut model, slug).await?;
        } else if regenerate_slug {
            model.set_field(self.slugs.slug_field_name(), None)?;
        }

        self.repository.save(&mut model).await?;
        ArticleDto::try_from(model)
    }
}
