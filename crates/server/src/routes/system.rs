use axum::Json;
use common::types::{Health, Message};

use crate::errors::JsonApiError;

pub async fn readiness() -> Json<Health> {
    Json(Health::default())
}

/// Always fails; used to check error rendering end to end.
pub async fn err() -> JsonApiError {
    JsonApiError::bad_request("Something went wrong")
}

pub async fn hello() -> Json<Message> {
    Json(Message::new("Hello, World!"))
}
