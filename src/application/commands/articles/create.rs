// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::{ensure_capability, users::profile_from_claims},
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleDraft, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub introduction: String,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub slug: Option<String>,
    pub category_id: i64,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    introduction: String,
    content: Option<String>,
    cover_image_url: Option<String>,
    slug: Option<String>,
    category_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = introduction.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn cover_image_url(mut self, url: impl Into<String>) -> Self {
        self.cover_image_url = Some(url.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            introduction: self.introduction,
            content: self.content.ok_or("content is required")?,
            cover_image_url: self.cover_image_url,
            slug: self.slug,
            category_id: self.category_id.ok_or("category_id is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        // Reject bad input before touching any repository.
        ArticleTitle::new(command.title.as_str())?;
        ArticleContent::new(command.content.as_str())?;

        let category_id = self
            .ensure_category_accepts(command.category_id, None)
            .await?;
        let now = self.clock.now();

        let slug_source = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(command.title.as_str());
        let slug = self
            .slug_service
            .generate_unique_slug(slug_source, None, now)
            .await?;

        // The author row must exist before the article can reference it. It
        // is written only once the request has passed every check above.
        self.user_repo
            .upsert(profile_from_claims(actor, now)?)
            .await?;

        let new_article = NewArticle::create(
            ArticleDraft {
                title: command.title,
                introduction: command.introduction,
                content: command.content,
                cover_image_url: command.cover_image_url,
                slug: slug.into_inner(),
                author_id: actor.id,
                category_id,
            },
            now,
        )?;

        let created = self.write_repo.insert(new_article).await?;
        tracing::debug!(article_id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
