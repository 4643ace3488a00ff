mod author;
mod profile;
mod service;

pub use author::GetAuthorQuery;
pub use service::UserQueryService;
