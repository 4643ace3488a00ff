// src/application/commands/categories/mod.rs
mod create;
mod delete;
mod edit;
mod service;

pub use create::CreateCategoryCommand;
pub use delete::DeleteCategoryCommand;
pub use edit::EditCategoryCommand;
pub use service::CategoryCommandService;
