// src/application/commands/categories/edit.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::CategoryName,
};

/// Complete replacement: name and archival flag are both required.
pub struct EditCategoryCommand {
    pub id: i64,
    pub category_name: String,
    pub is_archived: bool,
}

impl CategoryCommandService {
    pub async fn edit_category(
        &self,
        actor: &AuthenticatedUser,
        command: EditCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        self.ensure_can_manage(actor)?;
        CategoryName::new(command.category_name.as_str())?;

        let mut category = self.load_category(command.id).await?;
        self.ensure_name_available(&command.category_name, Some(category.id))
            .await?;

        let original_modified_on = category.modified_on;
        category.update(command.category_name, command.is_archived, self.clock.now())?;

        let updated = self
            .category_repo
            .update(category, original_modified_on)
            .await?;
        tracing::debug!(
            category_id = %updated.id,
            archived = updated.is_archived,
            "category updated"
        );
        Ok(updated.into())
    }
}
