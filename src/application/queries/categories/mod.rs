mod get;
mod list;
mod service;

pub use get::GetCategoryQuery;
pub use list::ListCategoriesQuery;
pub use service::CategoryQueryService;
