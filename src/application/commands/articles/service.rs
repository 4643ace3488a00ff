// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleId, ArticleReadRepository, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        category::{CategoryId, CategoryRepository},
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            user_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load_article(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// New placements must target an active category. An article may stay in
    /// a category that was archived after it was filed.
    pub(super) async fn ensure_category_accepts(
        &self,
        category_id: i64,
        current: Option<CategoryId>,
    ) -> ApplicationResult<CategoryId> {
        let id = CategoryId::new(category_id)?;
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::validation(format!("category {id} does not exist")))?;

        if category.is_archived && current != Some(id) {
            return Err(ApplicationError::validation(format!(
                "category {id} is archived"
            )));
        }

        Ok(id)
    }
}
