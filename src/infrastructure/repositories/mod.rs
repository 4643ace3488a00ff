// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_article;
mod postgres_category;
mod postgres_user;

pub use error::map_sqlx;
pub use memory::InMemoryStore;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_user::PostgresUserRepository;
