use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A stored user. `id` is assigned by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Create/update payload. A missing `name` decodes as an empty string and
/// any client-supplied `id` is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
