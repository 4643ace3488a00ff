// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::ArticleReadRepository,
        category::{Category, CategoryId, CategoryName, CategoryRepository},
    },
};

pub struct CategoryCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            article_repo,
            clock,
        }
    }

    pub(super) fn ensure_can_manage(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "manage")
    }

    pub(super) async fn load_category(&self, id: i64) -> ApplicationResult<Category> {
        let id = CategoryId::new(id)?;
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    /// Names are unique, ignoring the category being renamed.
    pub(super) async fn ensure_name_available(
        &self,
        name: &str,
        ignore: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        let name = CategoryName::new(name)?;
        match self.category_repo.find_by_name(&name).await? {
            Some(existing) if Some(existing.id) != ignore => Err(ApplicationError::conflict(
                format!("category '{name}' already exists"),
            )),
            _ => Ok(()),
        }
    }
}
