use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::KeysafeError;

/// Parse the `id` query parameter.
/// - absent or empty: `MissingUserId`
/// - not a base-10 `i64`: `InvalidUserId`
///
/// The first `id` pair wins when the key repeats.
pub fn parse_user_id(query: Option<&str>) -> Result<i64, KeysafeError> {
    let raw = query.and_then(|qs| {
        url::form_urlencoded::parse(qs.as_bytes())
            .find(|(k, _)| k == "id")
            .map(|(_, v)| v.into_owned())
    });

    match raw {
        None => Err(KeysafeError::MissingUserId),
        Some(v) if v.is_empty() => Err(KeysafeError::MissingUserId),
        Some(v) => v.parse().map_err(|_| KeysafeError::InvalidUserId(v)),
    }
}

/// Extractor for handlers keyed by `?id=`. Rejects before any storage access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = KeysafeError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_user_id(parts.uri.query()).map(UserId)
    }
}
