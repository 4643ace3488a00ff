// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Categories still holding articles cannot be removed; archive them
    /// instead.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        self.ensure_can_manage(actor)?;
        let category = self.load_category(command.id).await?;

        let in_use = self.article_repo.count_by_category(category.id).await?;
        if in_use > 0 {
            tracing::warn!(category_id = %category.id, articles = in_use, "category delete refused");
            return Err(ApplicationError::conflict(format!(
                "category is referenced by {in_use} article(s)"
            )));
        }

        self.category_repo.delete(category.id).await?;
        tracing::debug!(category_id = %category.id, "category deleted");
        Ok(())
    }
}
