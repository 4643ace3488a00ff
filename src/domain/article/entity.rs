// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleTitle, normalize_cover_image_url,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub introduction: String,
    pub content: ArticleContent,
    pub cover_image_url: Option<String>,
    pub slug: ArticleSlug,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub is_archived: bool,
    pub is_published: bool,
    pub published_on: Option<DateTime<Utc>>,
    pub created_on: DateTime<Utc>,
    pub modified_on: Option<DateTime<Utc>>,
}

/// Raw creation input, validated by [`NewArticle::create`].
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub introduction: String,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub slug: String,
    pub author_id: UserId,
    pub category_id: CategoryId,
}

/// Complete replacement state for an existing article.
#[derive(Debug, Clone)]
pub struct ArticleEdit {
    pub title: String,
    pub introduction: String,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub slug: String,
    pub category_id: CategoryId,
    pub is_archived: bool,
    pub published_on: Option<DateTime<Utc>>,
    pub is_published: Option<bool>,
}

impl ArticleEdit {
    /// Current state of `article` expressed as an edit, for callers that only
    /// change one field but must still go through [`Article::update`].
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.as_str().to_string(),
            introduction: article.introduction.clone(),
            content: article.content.as_str().to_string(),
            cover_image_url: article.cover_image_url.clone(),
            slug: article.slug.as_str().to_string(),
            category_id: article.category_id,
            is_archived: article.is_archived,
            published_on: article.published_on,
            is_published: Some(article.is_published),
        }
    }
}

impl Article {
    /// Replace every mutable field. Validation runs before any assignment, so
    /// an error leaves `self` untouched.
    pub fn update(&mut self, edit: ArticleEdit, now: DateTime<Utc>) -> DomainResult<()> {
        let title = ArticleTitle::new(edit.title)?;
        let content = ArticleContent::new(edit.content)?;
        let slug = ArticleSlug::new(edit.slug)?;

        let is_published = edit.is_published.unwrap_or(self.is_published);
        let published_on = match (is_published, edit.published_on) {
            (false, _) => None,
            (true, Some(explicit)) => Some(explicit),
            (true, None) => self.published_on.or(Some(now)),
        };

        self.title = title;
        self.introduction = edit.introduction;
        self.content = content;
        self.cover_image_url = normalize_cover_image_url(edit.cover_image_url);
        self.slug = slug;
        self.category_id = edit.category_id;
        self.is_archived = edit.is_archived;
        self.is_published = is_published;
        self.published_on = published_on;
        self.modified_on = Some(now);
        Ok(())
    }

    pub fn is_visible_to_public(&self) -> bool {
        !self.is_archived
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub introduction: String,
    pub content: ArticleContent,
    pub cover_image_url: Option<String>,
    pub slug: ArticleSlug,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub is_archived: bool,
    pub is_published: bool,
    pub published_on: Option<DateTime<Utc>>,
    pub created_on: DateTime<Utc>,
    pub modified_on: Option<DateTime<Utc>>,
}

impl NewArticle {
    pub fn create(draft: ArticleDraft, now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            title: ArticleTitle::new(draft.title)?,
            introduction: draft.introduction,
            content: ArticleContent::new(draft.content)?,
            cover_image_url: normalize_cover_image_url(draft.cover_image_url),
            slug: ArticleSlug::new(draft.slug)?,
            author_id: draft.author_id,
            category_id: draft.category_id,
            is_archived: false,
            is_published: false,
            published_on: None,
            created_on: now,
            modified_on: None,
        })
    }

    /// Attach the storage-assigned id.
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            introduction: self.introduction,
            content: self.content,
            cover_image_url: self.cover_image_url,
            slug: self.slug,
            author_id: self.author_id,
            category_id: self.category_id,
            is_archived: self.is_archived,
            is_published: self.is_published,
            published_on: self.published_on,
            created_on: self.created_on,
            modified_on: self.modified_on,
        }
    }
}

/// Persisted form of an [`Article::update`], guarded by the previous
/// `modified_on` so concurrent writers cannot silently overwrite each other.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub article: Article,
    pub original_modified_on: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use chrono::Duration;

    fn draft() -> ArticleDraft {
        ArticleDraft {
            title: "Hello".into(),
            introduction: "intro".into(),
            content: "body".into(),
            cover_image_url: None,
            slug: "hello".into(),
            author_id: UserId::new(7).unwrap(),
            category_id: CategoryId::new(3).unwrap(),
        }
    }

    fn sample_article() -> Article {
        NewArticle::create(draft(), Utc::now())
            .unwrap()
            .into_article(ArticleId::new(1).unwrap())
    }

    #[test]
    fn create_starts_active_and_unmodified() {
        let now = Utc::now();
        let article = NewArticle::create(draft(), now).unwrap();
        assert!(!article.is_archived);
        assert!(!article.is_published);
        assert_eq!(article.created_on, now);
        assert!(article.modified_on.is_none());
    }

    #[test]
    fn create_rejects_blank_content() {
        let mut input = draft();
        input.content = "  ".into();
        let err = NewArticle::create(input, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(msg) if msg.contains("content")));
    }

    #[test]
    fn update_sets_archive_flag_and_modified_on() {
        let mut article = sample_article();
        let now = Utc::now() + Duration::seconds(5);
        let mut edit = ArticleEdit::from_article(&article);
        edit.is_archived = true;
        article.update(edit, now).unwrap();
        assert!(article.is_archived);
        assert_eq!(article.modified_on, Some(now));
    }

    #[test]
    fn failed_update_leaves_article_untouched() {
        let mut article = sample_article();
        let before = article.clone();
        let mut edit = ArticleEdit::from_article(&article);
        edit.is_archived = true;
        edit.introduction = "changed".into();
        edit.title = " ".into();
        assert!(article.update(edit, Utc::now()).is_err());
        assert_eq!(article, before);
    }

    #[test]
    fn publishing_without_date_stamps_now_and_unpublishing_clears() {
        let mut article = sample_article();
        let now = Utc::now();
        let mut edit = ArticleEdit::from_article(&article);
        edit.is_published = Some(true);
        article.update(edit, now).unwrap();
        assert!(article.is_published);
        assert_eq!(article.published_on, Some(now));

        let later = now + Duration::minutes(1);
        let mut edit = ArticleEdit::from_article(&article);
        edit.is_published = Some(false);
        article.update(edit, later).unwrap();
        assert!(!article.is_published);
        assert!(article.published_on.is_none());
    }

    #[test]
    fn republishing_keeps_original_publication_date() {
        let mut article = sample_article();
        let first = Utc::now();
        let mut edit = ArticleEdit::from_article(&article);
        edit.is_published = Some(true);
        article.update(edit, first).unwrap();

        let edit = ArticleEdit::from_article(&article);
        article.update(edit, first + Duration::hours(1)).unwrap();
        assert_eq!(article.published_on, Some(first));
    }
}
