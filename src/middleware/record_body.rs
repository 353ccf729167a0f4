use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};

use crate::db::models::CredentialFields;
use crate::error::KeysafeError;

/// JSON body for create and update.
///
/// Unlike `axum::Json`, this ignores `Content-Type` and reports every decode
/// failure as `400 Error decoding JSON`.
pub struct RecordBody(pub CredentialFields);

impl<S> FromRequest<S> for RecordBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        serde_json::from_slice::<CredentialFields>(&bytes)
            .map(RecordBody)
            .map_err(|e| KeysafeError::from(e).into_response())
    }
}
