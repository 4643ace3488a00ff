// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use folio_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use folio_core::domain::user::{Role, UserId};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const OTHER_AUTHOR_TOKEN: &str = "other-author-token";
pub const READER_TOKEN: &str = "reader-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/// Identity behind each test token; capabilities are the role defaults.
pub fn user_for_token(token: &str) -> Option<AuthenticatedUser> {
    let (id, username, role) = match token {
        ADMIN_TOKEN => (1, "admin", Role::Admin),
        AUTHOR_TOKEN => (2, "author", Role::Author),
        OTHER_AUTHOR_TOKEN => (3, "other-author", Role::Author),
        READER_TOKEN => (4, "reader", Role::Reader),
        _ => return None,
    };

    let now = super::time::fixed_now();
    Some(AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        subject: format!("idp|{id}"),
        username: username.into(),
        email: Some(format!("{username}@example.com")),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    })
}

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            other => user_for_token(other)
                .ok_or_else(|| ApplicationError::unauthorized("invalid token")),
        }
    }
}
