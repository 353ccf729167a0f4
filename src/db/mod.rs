//! Database module: models and schema for the credential table.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request bodies
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: the shared storage handle and its statements

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{CredentialFields, CredentialRecord};
pub use schema::SQLITE_INIT;
pub use sqlite::{KeysafeStorage, SqlitePool};
