use crate::db::models::{CredentialFields, CredentialRecord};
use crate::db::schema::SQLITE_INIT;
use crate::error::KeysafeError;
use futures::TryStreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

const SELECT_ONE: &str = "SELECT id, password_name, login, password FROM keysafe WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, password_name, login, password FROM keysafe ORDER BY id";

/// Shared handle over the credential table. Cloning shares the pool;
/// each statement acquires a connection for its own duration.
#[derive(Clone)]
pub struct KeysafeStorage {
    pool: SqlitePool,
}

impl KeysafeStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the pool, creating the database file when it does not exist yet.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, KeysafeError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), KeysafeError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Round trip to the database with `SELECT 1`.
    pub async fn ping(&self) -> Result<(), KeysafeError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new record. Returns the assigned id when exactly one row was written.
    pub async fn insert(&self, fields: &CredentialFields) -> Result<Option<i64>, KeysafeError> {
        let result =
            sqlx::query("INSERT INTO keysafe (password_name, login, password) VALUES (?, ?, ?)")
                .bind(&fields.password_name)
                .bind(&fields.login)
                .bind(&fields.password)
                .execute(&self.pool)
                .await
                .map_err(KeysafeError::Insert)?;

        Ok((result.rows_affected() == 1).then(|| result.last_insert_rowid()))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<CredentialRecord>, KeysafeError> {
        let row = sqlx::query(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(KeysafeError::Query)?;

        row.map(|row| CredentialRecord::from_row(&row).map_err(KeysafeError::Scan))
            .transpose()
    }

    /// All records in ascending id order.
    ///
    /// A failure before the first row is a query error; after it, an iteration error.
    pub async fn list_all(&self) -> Result<Vec<CredentialRecord>, KeysafeError> {
        let mut rows = sqlx::query(SELECT_ALL).fetch(&self.pool);
        let mut records = Vec::new();

        loop {
            match rows.try_next().await {
                Ok(Some(row)) => {
                    records.push(CredentialRecord::from_row(&row).map_err(KeysafeError::Scan)?)
                }
                Ok(None) => break,
                Err(e) if records.is_empty() => return Err(KeysafeError::ListQuery(e)),
                Err(e) => return Err(KeysafeError::Iterate(e)),
            }
        }
        Ok(records)
    }

    /// Overwrite the mutable fields by id. Returns the number of rows matched.
    pub async fn update_by_id(
        &self,
        id: i64,
        fields: &CredentialFields,
    ) -> Result<u64, KeysafeError> {
        let result = sqlx::query(
            r#"UPDATE keysafe SET
                password_name = ?,
                login = ?,
                password = ?
              WHERE id = ?"#,
        )
        .bind(&fields.password_name)
        .bind(&fields.login)
        .bind(&fields.password)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(KeysafeError::Update)?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64, KeysafeError> {
        let result = sqlx::query("DELETE FROM keysafe WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(KeysafeError::Delete)?;
        Ok(result.rows_affected())
    }
}
