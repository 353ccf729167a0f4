use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `keysafe` table. The password is stored and returned as-is.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, FromRow)]
pub struct CredentialRecord {
    pub id: i64,
    pub password_name: String,
    pub login: String,
    pub password: String,
}

/// Mutable fields of a record, as accepted by create and update.
///
/// Missing fields decode as empty strings and unknown fields (including `id`)
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CredentialFields {
    pub password_name: String,
    pub login: String,
    pub password: String,
}
