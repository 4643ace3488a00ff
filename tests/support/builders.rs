// tests/support/builders.rs
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use folio_core::domain::article::*;
use folio_core::domain::category::CategoryId;
use folio_core::domain::user::UserId;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    author_id: i64,
    category_id: i64,
    archived: bool,
    published_on: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            content: "Test content".into(),
            author_id: 1,
            category_id: 1,
            archived: false,
            published_on: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    pub fn published_on(mut self, at: DateTime<Utc>) -> Self {
        self.published_on = Some(at);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            introduction: String::new(),
            content: ArticleContent::new(self.content).unwrap(),
            cover_image_url: None,
            slug: ArticleSlug::new(self.slug).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            category_id: CategoryId::new(self.category_id).unwrap(),
            is_archived: self.archived,
            is_published: self.published_on.is_some(),
            published_on: self.published_on,
            created_on: fixed_now(),
            modified_on: None,
        }
    }
}

/// JSON body for `POST /api/v1/articles`.
pub fn article_payload(title: &str, category_id: i64) -> Value {
    json!({
        "title": title,
        "introduction": format!("About {title}"),
        "content": format!("{title} body text"),
        "category_id": category_id,
    })
}
