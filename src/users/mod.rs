pub mod query;
pub mod repo;
pub mod repo_types;

pub use repo::StoreError;
pub use repo_types::{LoginRow, NewUser, Role, User};
