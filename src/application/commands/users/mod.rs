// src/application/commands/users/mod.rs
mod service;
mod sync_profile;

pub use service::UserCommandService;
pub(crate) use sync_profile::profile_from_claims;
