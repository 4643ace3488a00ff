use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleListCursor},
        category::CategoryId,
        user::UserId,
    },
};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub include_archived: bool,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
    pub search: Option<String>,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let filter = self.build_filter(actor, &query)?;
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self.read_repo.list_page(&filter, limit, cursor).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }

    fn build_filter(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: &ListArticlesQuery,
    ) -> ApplicationResult<ArticleFilter> {
        if query.include_archived {
            let actor = actor.ok_or_else(|| {
                ApplicationError::forbidden("authentication required for archived articles")
            })?;
            if !actor.has_capability("articles", "view:archived") {
                return Err(ApplicationError::forbidden(
                    "missing capability articles:view:archived",
                ));
            }
        }

        Ok(ArticleFilter {
            include_archived: query.include_archived,
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            author_id: query.author_id.map(UserId::new).transpose()?,
            search: query
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string),
        })
    }
}

fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<ArticleListCursor>> {
    token
        .map(|value| {
            ArticleListCursor::decode(value)
                .map_err(|_| ApplicationError::validation("invalid cursor token"))
        })
        .transpose()
}
