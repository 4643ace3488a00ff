// src/application/commands/articles/edit.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleContent, ArticleEdit, ArticleTitle, ArticleUpdate,
        specifications::{ArticleSpecification, CanEditArticleSpec},
    },
};
use chrono::{DateTime, Utc};

/// Complete replacement of an article's mutable state. Every field must be
/// supplied; there is no partial update.
pub struct EditArticleCommand {
    pub id: i64,
    pub title: String,
    pub introduction: String,
    pub content: String,
    pub cover_image_url: Option<String>,
    /// Blank keeps the current slug unless the title changed, in which case a
    /// fresh slug is derived from the new title.
    pub slug: Option<String>,
    pub category_id: i64,
    pub is_archived: bool,
    pub published_on: Option<DateTime<Utc>>,
    pub is_published: Option<bool>,
}

impl ArticleCommandService {
    pub async fn edit_article(
        &self,
        actor: &AuthenticatedUser,
        command: EditArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(command.id).await?;
        self.ensure_can_edit(actor, &article)?;

        ArticleTitle::new(command.title.as_str())?;
        ArticleContent::new(command.content.as_str())?;

        let category_id = self
            .ensure_category_accepts(command.category_id, Some(article.category_id))
            .await?;
        let now = self.clock.now();
        let slug = self.resolve_slug(&article, &command, now).await?;

        let edit = ArticleEdit {
            title: command.title,
            introduction: command.introduction,
            content: command.content,
            cover_image_url: command.cover_image_url,
            slug,
            category_id,
            is_archived: command.is_archived,
            published_on: command.published_on,
            is_published: command.is_published,
        };

        self.persist_edit(&mut article, edit, now).await
    }

    pub(super) fn ensure_can_edit(
        &self,
        actor: &AuthenticatedUser,
        article: &Article,
    ) -> ApplicationResult<()> {
        let spec = CanEditArticleSpec::new(&actor.capabilities, article, actor.id);
        if spec.is_satisfied() {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(
                "insufficient privileges to edit article",
            ))
        }
    }

    /// Apply `edit` through the entity rules, then write it guarded by the
    /// previous `modified_on`.
    pub(super) async fn persist_edit(
        &self,
        article: &mut Article,
        edit: ArticleEdit,
        now: DateTime<Utc>,
    ) -> ApplicationResult<ArticleDto> {
        let original_modified_on = article.modified_on;
        article.update(edit, now)?;

        let updated = self
            .write_repo
            .update(ArticleUpdate {
                article: article.clone(),
                original_modified_on,
            })
            .await
            .inspect_err(|err| {
                tracing::warn!(article_id = %article.id, error = %err, "article update rejected");
            })?;

        tracing::debug!(
            article_id = %updated.id,
            archived = updated.is_archived,
            "article updated"
        );
        Ok(updated.into())
    }

    async fn resolve_slug(
        &self,
        article: &Article,
        command: &EditArticleCommand,
        now: DateTime<Utc>,
    ) -> ApplicationResult<String> {
        let requested = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let source = match requested {
            Some(slug) if slug == article.slug.as_str() => return Ok(slug.to_string()),
            Some(slug) => slug,
            None if command.title == article.title.as_str() => {
                return Ok(article.slug.as_str().to_string());
            }
            None => command.title.as_str(),
        };

        let slug = self
            .slug_service
            .generate_unique_slug(source, Some(article.id), now)
            .await?;
        Ok(slug.into_inner())
    }
}
