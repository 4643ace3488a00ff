use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// Persist `category` if its stored `modified_on` still equals
    /// `original_modified_on`; otherwise fail with `Conflict`.
    async fn update(
        &self,
        category: Category,
        original_modified_on: Option<DateTime<Utc>>,
    ) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>>;
    /// Categories ordered by name.
    async fn list(&self, include_archived: bool) -> DomainResult<Vec<Category>>;
}
