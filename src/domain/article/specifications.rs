use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Capability, UserId};

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Grants an action on any article (`<verb>:any`) or only on the actor's own
/// articles (`<verb>:own`).
struct OwnershipRule<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
    verb: &'static str,
}

impl OwnershipRule<'_> {
    fn allows(&self) -> bool {
        let any = format!("{}:any", self.verb);
        let own = format!("{}:own", self.verb);
        self.has_capability(&any)
            || (self.has_capability(&own) && self.article.author_id == self.user_id)
    }

    fn has_capability(&self, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches("articles", action))
    }
}

pub struct CanEditArticleSpec<'a> {
    rule: OwnershipRule<'a>,
}

impl<'a> CanEditArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            rule: OwnershipRule {
                capabilities,
                article,
                user_id,
                verb: "update",
            },
        }
    }
}

impl ArticleSpecification for CanEditArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.rule.allows()
    }
}

pub struct CanDeleteArticleSpec<'a> {
    rule: OwnershipRule<'a>,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            rule: OwnershipRule {
                capabilities,
                article,
                user_id,
                verb: "delete",
            },
        }
    }
}

impl ArticleSpecification for CanDeleteArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.rule.allows()
    }
}

/// Archived articles are shown to the author and to actors holding
/// `articles:view:archived`.
pub struct CanViewArchivedArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanViewArchivedArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }
}

impl ArticleSpecification for CanViewArchivedArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.author_id == self.user_id
            || self
                .capabilities
                .iter()
                .any(|cap| cap.matches("articles", "view:archived"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleDraft, ArticleId, NewArticle};
    use crate::domain::category::CategoryId;
    use chrono::Utc;

    fn article_by(author: i64) -> Article {
        NewArticle::create(
            ArticleDraft {
                title: "t".into(),
                introduction: String::new(),
                content: "c".into(),
                cover_image_url: None,
                slug: "t".into(),
                author_id: UserId::new(author).unwrap(),
                category_id: CategoryId::new(1).unwrap(),
            },
            Utc::now(),
        )
        .unwrap()
        .into_article(ArticleId::new(1).unwrap())
    }

    #[test]
    fn own_capability_only_covers_own_articles() {
        let caps = HashSet::from([Capability::new("articles", "update:own")]);
        let mine = article_by(5);
        let theirs = article_by(6);
        let me = UserId::new(5).unwrap();
        assert!(CanEditArticleSpec::new(&caps, &mine, me).is_satisfied());
        assert!(!CanEditArticleSpec::new(&caps, &theirs, me).is_satisfied());
    }

    #[test]
    fn any_capability_covers_all_articles() {
        let caps = HashSet::from([Capability::new("articles", "delete:any")]);
        let theirs = article_by(6);
        assert!(CanDeleteArticleSpec::new(&caps, &theirs, UserId::new(5).unwrap()).is_satisfied());
    }
}
