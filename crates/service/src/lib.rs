//! Service layer for the users API.
//! - `users` holds the record types, the `UserStore` contract and its in-memory implementation.
//! - `storage` holds reusable storage helpers.

pub mod storage;
pub mod users;

pub use users::{InMemoryUserStore, User, UserId, UserInput, UserStore};
