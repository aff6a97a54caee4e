use std::sync::Arc;

use service::UserStore;

/// Shared handler state. The store is constructed once at startup and only
/// reached through this handle.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
