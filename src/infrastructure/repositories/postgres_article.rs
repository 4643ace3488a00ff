// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticleListCursor, ArticleReadRepository,
    ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, introduction, content, cover_image_url, slug, author_id, \
     category_id, is_archived, is_published, published_on, created_on, modified_on";

/// Article storage backed by the `articles` table. Implements both the read
/// and write side.
#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    introduction: String,
    content: String,
    cover_image_url: Option<String>,
    slug: String,
    author_id: i64,
    category_id: i64,
    is_archived: bool,
    is_published: bool,
    published_on: Option<DateTime<Utc>>,
    created_on: DateTime<Utc>,
    modified_on: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            introduction: row.introduction,
            content: ArticleContent::new(row.content)?,
            cover_image_url: row.cover_image_url,
            slug: ArticleSlug::new(row.slug)?,
            author_id: UserId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
            is_archived: row.is_archived,
            is_published: row.is_published,
            published_on: row.published_on,
            created_on: row.created_on,
            modified_on: row.modified_on,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let sql = format!(
            "INSERT INTO articles (title, introduction, content, cover_image_url, slug, author_id,
                 category_id, is_archived, is_published, published_on, created_on, modified_on)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(article.title.as_str())
            .bind(&article.introduction)
            .bind(article.content.as_str())
            .bind(&article.cover_image_url)
            .bind(article.slug.as_str())
            .bind(i64::from(article.author_id))
            .bind(i64::from(article.category_id))
            .bind(article.is_archived)
            .bind(article.is_published)
            .bind(article.published_on)
            .bind(article.created_on)
            .bind(article.modified_on)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            article,
            original_modified_on,
        } = update;

        let sql = format!(
            "UPDATE articles SET title = $1, introduction = $2, content = $3,
                 cover_image_url = $4, slug = $5, category_id = $6, is_archived = $7,
                 is_published = $8, published_on = $9, modified_on = $10
             WHERE id = $11 AND modified_on IS NOT DISTINCT FROM $12
             RETURNING {ARTICLE_COLUMNS}"
        );

        let maybe_row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(article.title.as_str())
            .bind(&article.introduction)
            .bind(article.content.as_str())
            .bind(&article.cover_image_url)
            .bind(article.slug.as_str())
            .bind(i64::from(article.category_id))
            .bind(article.is_archived)
            .bind(article.is_published)
            .bind(article.published_on)
            .bind(article.modified_on)
            .bind(i64::from(article.id))
            .bind(original_modified_on)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

/// Escape LIKE metacharacters so user search text matches literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl PostgresArticleRepository {
    fn apply_conditions<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        filter: &'a ArticleFilter,
        cursor: Option<&'a ArticleListCursor>,
    ) {
        builder.push(" WHERE TRUE");

        if !filter.include_archived {
            builder.push(" AND is_archived = FALSE");
        }

        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(author_id) = filter.author_id {
            builder.push(" AND author_id = ");
            builder.push_bind(i64::from(author_id));
        }

        if let Some(search) = filter.search.as_deref() {
            let pattern = like_pattern(search);
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR introduction ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let Some(cursor) = cursor {
            builder.push(" AND (created_on, id) < (");
            builder.push_bind(cursor.created_on);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.article_id));
            builder.push(")");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_conditions(&mut builder, filter, cursor.as_ref());
        builder.push(" ORDER BY created_on DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if articles.len() > limit as usize {
            articles.pop();
            if let Some(last) = articles.last() {
                next_cursor = Some(ArticleListCursor::from_parts(last.created_on, last.id));
            }
        }

        Ok((articles, next_cursor))
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles WHERE category_id = $1")
            .bind(i64::from(category_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }
}
