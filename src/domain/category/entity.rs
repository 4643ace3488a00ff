// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub category_name: CategoryName,
    pub is_archived: bool,
    pub created_on: DateTime<Utc>,
    pub modified_on: Option<DateTime<Utc>>,
}

impl Category {
    /// Rename and set the archival flag exactly as given. A blank name fails
    /// before anything is changed.
    pub fn update(
        &mut self,
        category_name: impl Into<String>,
        is_archived: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let category_name = CategoryName::new(category_name)?;
        self.category_name = category_name;
        self.is_archived = is_archived;
        self.modified_on = Some(now);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub category_name: CategoryName,
    pub is_archived: bool,
    pub created_on: DateTime<Utc>,
}

impl NewCategory {
    pub fn create(category_name: impl Into<String>, now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            category_name: CategoryName::new(category_name)?,
            is_archived: false,
            created_on: now,
        })
    }

    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            category_name: self.category_name,
            is_archived: self.is_archived,
            created_on: self.created_on,
            modified_on: None,
        }
    }
}
