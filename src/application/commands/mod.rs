pub mod articles;
pub mod categories;
mod capability;
pub mod users;

pub(crate) use capability::ensure_capability;
