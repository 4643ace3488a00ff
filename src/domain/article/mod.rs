pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleDraft, ArticleEdit, ArticleUpdate, NewArticle};
pub use repository::{ArticleFilter, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleContent, ArticleId, ArticleListCursor, ArticleSlug, ArticleTitle,
};
