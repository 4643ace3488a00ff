// src/infrastructure/security/mod.rs
mod claims;
pub mod token;

pub use token::BiscuitTokenManager;
