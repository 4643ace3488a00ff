use super::CategoryQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct GetCategoryQuery {
    pub id: i64,
}

impl CategoryQueryService {
    pub async fn get_category(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetCategoryQuery,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(query.id)?;
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .filter(|category| !category.is_archived || Self::can_view_archived(actor))
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(category.into())
    }
}
