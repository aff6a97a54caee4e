use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::{User, UserId, UserInput};
use tracing::{debug, info};

use crate::errors::JsonApiError;
use crate::state::AppState;

const USER_NOT_FOUND: &str = "User not found";

fn parse_id(id: Result<Path<UserId>, PathRejection>) -> Result<UserId, JsonApiError> {
    id.map(|Path(id)| id).map_err(|e| {
        debug!(error = %e, "rejecting user id");
        JsonApiError::bad_request("Invalid user ID")
    })
}

/// Decode the body as JSON whatever the `Content-Type`; a literal `null`
/// decodes as an empty input.
fn parse_body(payload: Result<Bytes, BytesRejection>, message: &str) -> Result<UserInput, JsonApiError> {
    let bytes = payload.map_err(|e| {
        debug!(error = %e, "cannot read user payload");
        JsonApiError::bad_request(message)
    })?;
    serde_json::from_slice::<Option<UserInput>>(&bytes)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            debug!(error = %e, "rejecting user payload");
            JsonApiError::bad_request(message)
        })
}

/// List all users in insertion order.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

/// Create a user; the store assigns the id.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<User>), JsonApiError> {
    let input = parse_body(payload, "error at payload")?;
    let user = state.users.create(input).await;
    info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Rename a user. The id is checked before the body.
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Json<User>, JsonApiError> {
    let id = parse_id(id)?;
    let input = parse_body(payload, "Invalid request payload")?;
    match state.users.update(id, input).await {
        Some(user) => {
            info!(user_id = id, "user updated");
            Ok(Json(user))
        }
        None => Err(JsonApiError::not_found(USER_NOT_FOUND)),
    }
}

pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let id = parse_id(id)?;
    if state.users.delete(id).await {
        info!(user_id = id, "user deleted");
        Ok(Json(Message::new("User deleted")))
    } else {
        Err(JsonApiError::not_found(USER_NOT_FOUND))
    }
}
