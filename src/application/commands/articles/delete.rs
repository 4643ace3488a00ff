// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::specifications::{ArticleSpecification, CanDeleteArticleSpec},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_article(command.id).await?;

        let delete_spec = CanDeleteArticleSpec::new(&actor.capabilities, &article, actor.id);

        if !delete_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete article",
            ));
        }

        self.write_repo.delete(article.id).await?;
        tracing::debug!(article_id = %article.id, "article deleted");
        Ok(())
    }
}
