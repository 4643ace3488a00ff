// src/application/commands/articles/archive.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleEdit,
};

/// Flip only the archival flag. The rest of the article is re-applied as-is
/// so the change still runs through the full update rules.
pub struct SetArchiveStateCommand {
    pub id: i64,
    pub archived: bool,
}

impl ArticleCommandService {
    pub async fn set_archive_state(
        &self,
        actor: &AuthenticatedUser,
        command: SetArchiveStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(command.id).await?;
        self.ensure_can_edit(actor, &article)?;

        let mut edit = ArticleEdit::from_article(&article);
        edit.is_archived = command.archived;

        let now = self.clock.now();
        self.persist_edit(&mut article, edit, now).await
    }
}
