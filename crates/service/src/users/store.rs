use async_trait::async_trait;

use super::domain::{User, UserId, UserInput};

/// Trait abstraction over the user collection.
///
/// Every operation is atomic with respect to every other one. "Not found" is
/// reported as a value (`None` / `false`), never as an error.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Snapshot of all users in insertion order.
    async fn list(&self) -> Vec<User>;
    /// Append a user with the next id.
    async fn create(&self, input: UserInput) -> User;
    /// Replace the name of the user with `id`; position and id stay as they are.
    async fn update(&self, id: UserId, input: UserInput) -> Option<User>;
    /// Remove the user with `id`, keeping the order of the rest; returns whether it existed.
    async fn delete(&self, id: UserId) -> bool;
}
