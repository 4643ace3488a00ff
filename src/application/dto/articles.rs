use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub introduction: String,
    pub content: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub slug: String,
    pub author_id: i64,
    pub category_id: i64,
    pub is_archived: bool,
    pub is_published: bool,
    #[serde(default)]
    pub published_on: Option<DateTime<Utc>>,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            introduction: article.introduction,
            content: article.content.into_inner(),
            cover_image_url: article.cover_image_url,
            slug: article.slug.into_inner(),
            author_id: article.author_id.into(),
            category_id: article.category_id.into(),
            is_archived: article.is_archived,
            is_published: article.is_published,
            published_on: article.published_on,
            created_on: article.created_on,
            modified_on: article.modified_on,
        }
    }
}
