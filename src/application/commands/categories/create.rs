// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::NewCategory,
};

pub struct CreateCategoryCommand {
    pub category_name: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        self.ensure_can_manage(actor)?;

        let new_category = NewCategory::create(command.category_name, self.clock.now())?;
        self.ensure_name_available(new_category.category_name.as_str(), None)
            .await?;

        let created = self.category_repo.insert(new_category).await?;
        tracing::debug!(category_id = %created.id, name = %created.category_name, "category created");
        Ok(created.into())
    }
}
