// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    category_name: String,
    is_archived: bool,
    created_on: DateTime<Utc>,
    modified_on: Option<DateTime<Utc>>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            category_name: CategoryName::new(row.category_name)?,
            is_archived: row.is_archived,
            created_on: row.created_on,
            modified_on: row.modified_on,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (category_name, is_archived, created_on)
             VALUES ($1, $2, $3)
             RETURNING id, category_name, is_archived, created_on, modified_on",
        )
        .bind(category.category_name.as_str())
        .bind(category.is_archived)
        .bind(category.created_on)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(
        &self,
        category: Category,
        original_modified_on: Option<DateTime<Utc>>,
    ) -> DomainResult<Category> {
        let maybe_row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET category_name = $1, is_archived = $2, modified_on = $3
             WHERE id = $4 AND modified_on IS NOT DISTINCT FROM $5
             RETURNING id, category_name, is_archived, created_on, modified_on",
        )
        .bind(category.category_name.as_str())
        .bind(category.is_archived)
        .bind(category.modified_on)
        .bind(i64::from(category.id))
        .bind(original_modified_on)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("category update conflict, please retry".into()))?;
        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, category_name, is_archived, created_on, modified_on
             FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, category_name, is_archived, created_on, modified_on
             FROM categories WHERE category_name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self, include_archived: bool) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"SELECT id, category_name, is_archived, created_on, modified_on
             FROM categories
             WHERE $1 OR is_archived = FALSE
             ORDER BY category_name COLLATE "C" ASC, id ASC"#,
        )
        .bind(include_archived)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
