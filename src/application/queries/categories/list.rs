use super::CategoryQueryService;
use crate::application::{
    dto::{AuthenticatedUser, CategoryDto},
    error::{ApplicationError, ApplicationResult},
};

#[derive(Debug, Clone, Default)]
pub struct ListCategoriesQuery {
    pub include_archived: bool,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        if query.include_archived && !Self::can_view_archived(actor) {
            return Err(ApplicationError::forbidden(
                "missing capability categories:view:archived",
            ));
        }

        let categories = self.category_repo.list(query.include_archived).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
