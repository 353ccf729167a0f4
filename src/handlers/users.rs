use axum::{extract::State, http::StatusCode, response::Response};
use tracing::info;

use crate::middleware::{
    MessageResponse, RecordBody, UserId, build_json_response, build_pretty_response,
};
use crate::{KeysafeError, router::KeysafeState};

/// POST /api/users/create
pub async fn create_user(
    State(state): State<KeysafeState>,
    RecordBody(fields): RecordBody,
) -> Result<Response, KeysafeError> {
    let id = state
        .storage
        .insert(&fields)
        .await?
        .ok_or(KeysafeError::CreateFailed)?;

    info!(id, "user created");
    Ok(build_json_response(
        StatusCode::CREATED,
        &MessageResponse {
            message: "User created successfully",
        },
    ))
}

/// GET /api/users/get?id=
pub async fn get_user(
    State(state): State<KeysafeState>,
    UserId(id): UserId,
) -> Result<Response, KeysafeError> {
    let record = state
        .storage
        .get_by_id(id)
        .await?
        .ok_or(KeysafeError::UserNotFound)?;
    Ok(build_pretty_response(StatusCode::OK, &record))
}

/// PUT|POST /api/users/update?id=
///
/// Zero matched rows is reported like a failed delete.
pub async fn update_user(
    State(state): State<KeysafeState>,
    UserId(id): UserId,
    RecordBody(fields): RecordBody,
) -> Result<Response, KeysafeError> {
    if state.storage.update_by_id(id, &fields).await? == 0 {
        return Err(KeysafeError::NoSuchUser);
    }

    info!(id, "user updated");
    Ok(build_json_response(
        StatusCode::OK,
        &MessageResponse {
            message: "User updated successfully",
        },
    ))
}

/// DELETE|POST /api/users/delete?id=
pub async fn delete_user(
    State(state): State<KeysafeState>,
    UserId(id): UserId,
) -> Result<Response, KeysafeError> {
    if state.storage.delete_by_id(id).await? == 0 {
        return Err(KeysafeError::NoSuchUser);
    }

    info!(id, "user deleted");
    Ok(build_json_response(
        StatusCode::OK,
        &MessageResponse {
            message: "User deleted successfully",
        },
    ))
}

/// GET /api/users/getallusers
pub async fn get_all_users(State(state): State<KeysafeState>) -> Result<Response, KeysafeError> {
    let records = state.storage.list_all().await?;
    Ok(build_pretty_response(StatusCode::OK, &records))
}
