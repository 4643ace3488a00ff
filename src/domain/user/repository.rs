use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::UserId,
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_subject(&self, subject: &str) -> DomainResult<Option<User>>;

    /// Insert the user, or refresh username/email/role of the row that already
    /// carries the same identity-provider subject.
    async fn upsert(&self, user: NewUser) -> DomainResult<User>;
}
