use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleReadRepository,
        specifications::{ArticleSpecification, CanViewArchivedArticleSpec},
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Archived articles answer `NotFound` to anyone who may not see them, so
    /// their existence is not leaked.
    pub(super) fn ensure_visible(
        &self,
        actor: Option<&AuthenticatedUser>,
        article: &Article,
    ) -> ApplicationResult<()> {
        if article.is_visible_to_public() {
            return Ok(());
        }

        let actor = actor.ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let spec = CanViewArchivedArticleSpec::new(&actor.capabilities, article, actor.id);
        if spec.is_satisfied() {
            Ok(())
        } else {
            Err(ApplicationError::not_found("article not found"))
        }
    }
}
