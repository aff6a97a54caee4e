//! User records and the store that owns them.

pub mod domain;
pub mod memory;
pub mod store;

pub use domain::{User, UserId, UserInput};
pub use memory::InMemoryUserStore;
pub use store::UserStore;
