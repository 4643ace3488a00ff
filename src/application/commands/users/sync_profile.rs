// src/application/commands/users/sync_profile.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::ApplicationResult,
    },
    domain::user::{NewUser, Username},
};
use chrono::{DateTime, Utc};

/// Local user row for the identity carried by `actor`'s token.
pub(crate) fn profile_from_claims(
    actor: &AuthenticatedUser,
    now: DateTime<Utc>,
) -> ApplicationResult<NewUser> {
    Ok(NewUser::new(
        actor.id,
        actor.subject.clone(),
        Username::new(actor.username.clone())?,
        actor.email.clone(),
        actor.role,
        now,
    )?)
}

impl UserCommandService {
    /// Mirror the token's identity claims into the local user table so
    /// articles can reference their author.
    pub async fn sync_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let new_user = profile_from_claims(actor, self.clock.now())?;
        let user = self.user_repo.upsert(new_user).await?;
        tracing::debug!(user_id = i64::from(user.id), "user profile synchronised");
        Ok(user.into())
    }
}
