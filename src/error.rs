use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{debug, error};

#[derive(Debug, ThisError)]
pub enum KeysafeError {
    #[error("Missing user ID parameter")]
    MissingUserId,

    #[error("Invalid user ID parameter: {0}")]
    InvalidUserId(String),

    #[error("Error decoding JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("User not found")]
    UserNotFound,

    /// Delete or update matched no row.
    #[error("We cannot find this user")]
    NoSuchUser,

    #[error("Error inserting data into the database: {0}")]
    Insert(#[source] SqlxError),

    #[error("Error creating user")]
    CreateFailed,

    #[error("Error querying the database: {0}")]
    Query(#[source] SqlxError),

    #[error("Error querying the database: {0}")]
    ListQuery(#[source] SqlxError),

    #[error("Error scanning row: {0}")]
    Scan(#[source] SqlxError),

    #[error("Error iterating over rows: {0}")]
    Iterate(#[source] SqlxError),

    #[error("Error updating user in the database: {0}")]
    Update(#[source] SqlxError),

    #[error("Error deleting user from the database: {0}")]
    Delete(#[source] SqlxError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl KeysafeError {
    pub fn status(&self) -> StatusCode {
        match self {
            KeysafeError::MissingUserId
            | KeysafeError::InvalidUserId(_)
            | KeysafeError::InvalidBody(_)
            | KeysafeError::NoSuchUser => StatusCode::BAD_REQUEST,
            KeysafeError::UserNotFound => StatusCode::NOT_FOUND,
            KeysafeError::Insert(_)
            | KeysafeError::CreateFailed
            | KeysafeError::Query(_)
            | KeysafeError::ListQuery(_)
            | KeysafeError::Scan(_)
            | KeysafeError::Iterate(_)
            | KeysafeError::Update(_)
            | KeysafeError::Delete(_)
            | KeysafeError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ApiErrorBody {
        let (code, message) = match self {
            KeysafeError::MissingUserId => ("MISSING_PARAMETER", "Missing user ID parameter".into()),
            KeysafeError::InvalidUserId(_) => {
                ("INVALID_PARAMETER", "Invalid user ID parameter".into())
            }
            KeysafeError::InvalidBody(_) => ("INVALID_BODY", "Error decoding JSON".into()),
            KeysafeError::UserNotFound => ("NOT_FOUND", "User not found".into()),
            KeysafeError::NoSuchUser => ("NOT_FOUND", "We cannot find this user".into()),
            KeysafeError::Insert(_) => (
                "INTERNAL_ERROR",
                "Error inserting data into the database".into(),
            ),
            KeysafeError::CreateFailed => ("INTERNAL_ERROR", "Error creating user".into()),
            KeysafeError::Query(_) => ("INTERNAL_ERROR", "Error querying the database".into()),
            // Read-all reports the driver detail, single-row reads do not.
            KeysafeError::ListQuery(e) => (
                "INTERNAL_ERROR",
                format!("Error querying the database: {e}"),
            ),
            KeysafeError::Scan(_) => ("INTERNAL_ERROR", "Error scanning row".into()),
            KeysafeError::Iterate(_) => ("INTERNAL_ERROR", "Error iterating over rows".into()),
            KeysafeError::Update(_) => (
                "INTERNAL_ERROR",
                "Error updating user in the database".into(),
            ),
            KeysafeError::Delete(_) => (
                "INTERNAL_ERROR",
                "Error deleting user from the database".into(),
            ),
            KeysafeError::DatabaseError(_) => (
                "INTERNAL_ERROR",
                "An internal server error occurred.".into(),
            ),
        };
        ApiErrorBody {
            code: code.to_string(),
            message,
        }
    }
}

impl IntoResponse for KeysafeError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = self.body();
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
