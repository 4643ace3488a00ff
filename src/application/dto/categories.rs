use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub category_name: String,
    pub is_archived: bool,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            category_name: category.category_name.into_inner(),
            is_archived: category.is_archived,
            created_on: category.created_on,
            modified_on: category.modified_on,
        }
    }
}
