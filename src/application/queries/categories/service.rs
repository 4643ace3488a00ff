use std::sync::Arc;

use crate::{application::dto::AuthenticatedUser, domain::category::CategoryRepository};

pub struct CategoryQueryService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub(super) fn can_view_archived(actor: Option<&AuthenticatedUser>) -> bool {
        actor.is_some_and(|actor| actor.has_capability("categories", "view:archived"))
    }
}
