//! SQL DDL for bootstrapping the credential table.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, never reused after a delete
/// - `password_name`, `login`, `password` as plain TEXT
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS keysafe (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    password_name TEXT NOT NULL,
    login TEXT NOT NULL,
    password TEXT NOT NULL
);
"#;
