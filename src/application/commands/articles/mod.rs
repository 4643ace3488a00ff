// src/application/commands/articles/mod.rs
mod archive;
mod create;
mod delete;
mod edit;
mod service;

pub use archive::SetArchiveStateCommand;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use edit::EditArticleCommand;
pub use service::ArticleCommandService;
