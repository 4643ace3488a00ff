// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuild the caller identity from the authority facts of a verified token.
/// Role capabilities are merged with any explicit `right` facts.
pub(super) fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let user_id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;
    let username = ctx
        .username
        .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
    let subject = ctx
        .subject
        .ok_or_else(|| ApplicationError::unauthorized("missing subject"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let mut capabilities = role.default_capabilities();
    capabilities.extend(ctx.capabilities);

    Ok(AuthenticatedUser {
        id: user_id,
        subject,
        username,
        email: ctx.email,
        role,
        capabilities,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    subject: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply(fact.predicate);
        }
        ctx
    }

    fn apply(&mut self, predicate: Predicate) {
        let name = predicate.name.clone();
        let mut terms = predicate.terms.into_iter();
        match (name.as_str(), terms.next(), terms.next()) {
            ("user", Some(Term::Integer(id)), Some(Term::Str(username))) => {
                self.user_id = Some(id);
                self.username = Some(username);
            }
            ("subject", Some(Term::Str(subject)), None) => self.subject = Some(subject),
            ("email", Some(Term::Str(email)), None) => self.email = Some(email),
            ("role", Some(Term::Str(role)), None) => self.role = role.parse().ok(),
            ("issued_at", Some(Term::Date(secs)), None) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(secs));
            }
            ("expires_at", Some(Term::Date(secs)), None) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(secs));
            }
            ("right", Some(Term::Str(resource)), Some(Term::Str(action))) => {
                self.capabilities.insert(Capability::new(resource, action));
            }
            _ => {}
        }
    }
}
