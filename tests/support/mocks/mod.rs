// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;
pub mod util;

pub use security::{
    ADMIN_TOKEN, AUTHOR_TOKEN, DummyTokenManager, EXPIRED_TOKEN, OTHER_AUTHOR_TOKEN,
    READER_TOKEN, user_for_token,
};
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug};
