// src/infrastructure/repositories/memory.rs
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleListCursor, ArticleReadRepository, ArticleSlug,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, User, UserId, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    categories: BTreeMap<i64, Category>,
    articles: BTreeMap<i64, Article>,
    next_category_id: i64,
    next_article_id: i64,
}

impl Tables {
    fn allocate_category_id(&mut self) -> DomainResult<CategoryId> {
        self.next_category_id += 1;
        CategoryId::new(self.next_category_id)
    }

    fn allocate_article_id(&mut self) -> DomainResult<ArticleId> {
        self.next_article_id += 1;
        ArticleId::new(self.next_article_id)
    }

    fn slug_taken(&self, slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
        self.articles
            .values()
            .any(|a| a.slug == *slug && Some(a.id) != except)
    }

    fn name_taken(&self, name: &CategoryName, except: Option<CategoryId>) -> bool {
        self.categories
            .values()
            .any(|c| c.category_name == *name && Some(c.id) != except)
    }

    fn check_references(&self, author_id: UserId, category_id: CategoryId) -> DomainResult<()> {
        if !self.users.contains_key(&author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        if !self.categories.contains_key(&i64::from(category_id)) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

/// Process-local storage implementing every repository port. Enforces the
/// same uniqueness, reference and optimistic-update rules as the Postgres
/// schema so services behave identically on either backend.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(article: &Article, filter: &ArticleFilter, needle: Option<&str>) -> bool {
    if !filter.include_archived && article.is_archived {
        return false;
    }
    if filter.category_id.is_some_and(|id| id != article.category_id) {
        return false;
    }
    if filter.author_id.is_some_and(|id| id != article.author_id) {
        return false;
    }
    if let Some(needle) = needle {
        let hit = [
            article.title.as_str(),
            article.introduction.as_str(),
            article.content.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle));
        if !hit {
            return false;
        }
    }
    true
}

fn before_cursor(article: &Article, cursor: Option<&ArticleListCursor>) -> bool {
    cursor.is_none_or(|c| (article.created_on, article.id) < (c.created_on, c.article_id))
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tables = self.tables.write().await;
        if tables.slug_taken(&article.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        tables.check_references(article.author_id, article.category_id)?;

        let id = tables.allocate_article_id()?;
        let article = article.into_article(id);
        tables.articles.insert(i64::from(id), article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            article,
            original_modified_on,
        } = update;

        let mut tables = self.tables.write().await;
        let stored_modified_on = tables
            .articles
            .get(&i64::from(article.id))
            .map(|stored| stored.modified_on);
        if stored_modified_on != Some(original_modified_on) {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }
        if tables.slug_taken(&article.slug, Some(article.id)) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        tables.check_references(article.author_id, article.category_id)?;

        tables.articles.insert(i64::from(article.id), article.clone());
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .articles
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let tables = self.tables.read().await;
        Ok(tables.articles.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let tables = self.tables.read().await;
        Ok(tables.articles.values().find(|a| a.slug == *slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let limit = limit.clamp(1, 100) as usize;
        let needle = filter.search.as_deref().map(str::to_lowercase);

        let tables = self.tables.read().await;
        let mut matching: Vec<&Article> = tables
            .articles
            .values()
            .filter(|a| matches_filter(a, filter, needle.as_deref()))
            .filter(|a| before_cursor(a, cursor.as_ref()))
            .collect();
        matching.sort_by(|a, b| (b.created_on, b.id).cmp(&(a.created_on, a.id)));

        let has_more = matching.len() > limit;
        let page: Vec<Article> = matching.into_iter().take(limit).cloned().collect();
        let next_cursor = if has_more {
            page.last()
                .map(|last| ArticleListCursor::from_parts(last.created_on, last.id))
        } else {
            None
        };

        Ok((page, next_cursor))
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        let tables = self.tables.read().await;
        let count = tables
            .articles
            .values()
            .filter(|a| a.category_id == category_id)
            .count();
        Ok(count as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.tables.write().await;
        if tables.name_taken(&category.category_name, None) {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        let id = tables.allocate_category_id()?;
        let category = category.into_category(id);
        tables.categories.insert(i64::from(id), category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        category: Category,
        original_modified_on: Option<DateTime<Utc>>,
    ) -> DomainResult<Category> {
        let mut tables = self.tables.write().await;
        let stored_modified_on = tables
            .categories
            .get(&i64::from(category.id))
            .map(|stored| stored.modified_on);
        if stored_modified_on != Some(original_modified_on) {
            return Err(DomainError::Conflict(
                "category update conflict, please retry".into(),
            ));
        }
        if tables.name_taken(&category.category_name, Some(category.id)) {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        tables
            .categories
            .insert(i64::from(category.id), category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.tables.write().await;
        if tables.articles.values().any(|a| a.category_id == id) {
            return Err(DomainError::Conflict("category still has articles".into()));
        }
        tables
            .categories
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&i64::from(id)).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .find(|c| c.category_name == *name)
            .cloned())
    }

    async fn list(&self, include_archived: bool) -> DomainResult<Vec<Category>> {
        let tables = self.tables.read().await;
        let mut categories: Vec<Category> = tables
            .categories
            .values()
            .filter(|c| include_archived || !c.is_archived)
            .cloned()
            .collect();
        categories.sort_by(|a, b| {
            a.category_name
                .as_str()
                .cmp(b.category_name.as_str())
                .then(a.id.cmp(&b.id))
        });
        Ok(categories)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn find_by_subject(&self, subject: &str) -> DomainResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.subject == subject).cloned())
    }

    async fn upsert(&self, user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables.write().await;
        if tables
            .users
            .values()
            .any(|u| u.subject == user.subject && u.id != user.id)
        {
            return Err(DomainError::Conflict("subject already registered".into()));
        }

        let created_on = tables
            .users
            .get(&user.id)
            .map_or(user.created_on, |existing| existing.created_on);
        let mut stored = user.into_user();
        stored.created_on = created_on;
        tables.users.insert(stored.id, stored.clone());
        Ok(stored)
    }
}
