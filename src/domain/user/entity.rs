// src/domain/user/entity.rs
use crate::domain::errors::{DomainResult, require_text};
use crate::domain::user::value_objects::{Role, UserId, Username};
use chrono::{DateTime, Utc};

/// Local projection of an identity-provider account, kept so articles can
/// reference their author and profile pages have something to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub subject: String,
    pub username: Username,
    pub email: Option<String>,
    pub role: Role,
    pub created_on: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub subject: String,
    pub username: Username,
    pub email: Option<String>,
    pub role: Role,
    pub created_on: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        id: UserId,
        subject: impl Into<String>,
        username: Username,
        email: Option<String>,
        role: Role,
        created_on: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            subject: require_text("subject", subject.into())?,
            username,
            email: email.filter(|e| !e.trim().is_empty()),
            role,
            created_on,
        })
    }

    pub fn into_user(self) -> User {
        User {
            id: self.id,
            subject: self.subject,
            username: self.username,
            email: self.email,
            role: self.role,
            created_on: self.created_on,
        }
    }
}
