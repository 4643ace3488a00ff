pub mod articles;
pub mod auth;
pub mod categories;
pub mod pagination;
pub mod users;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use pagination::CursorPage;
pub use users::{CapabilityView, UserDto, UserProfileDto};
