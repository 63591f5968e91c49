use async_trait::async_trait;
use jiff::Timestamp;
use portkey_core::{MappingRecord, MappingStore, ShortCode, StorageError};
use sqlx::{MySqlPool, Row};

/// Embedded schema migrations for the `short_urls` table.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// MySQL implementation of [`MappingStore`].
///
/// The `short_urls` table carries a unique index on `short_code`; a
/// violated insert surfaces as [`StorageError::Conflict`]. Records are
/// append-only, so there is no update or delete path. `created_at` is
/// stored as unix seconds.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Applies any pending schema migrations.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Operation(format!("migration failed: {e}")))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn parse_created_at(seconds: i64) -> Result<Timestamp, StorageError> {
    Timestamp::from_second(seconds).map_err(|e| {
        StorageError::InvalidData(format!("invalid created_at timestamp '{}': {e}", seconds))
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl MappingStore for MySqlStore {
    async fn put(&self, code: &ShortCode, record: MappingRecord) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_urls (short_code, long_url, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(code.as_str())
        .bind(record.target)
        .bind(record.created_at.as_second())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(StorageError::Conflict(code.to_string())),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT long_url, created_at
            FROM short_urls
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let target: String = row.try_get("long_url").map_err(map_sqlx_error)?;
        let created_at_raw: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;

        Ok(Some(MappingRecord {
            target,
            created_at: parse_created_at(created_at_raw)?,
        }))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool, StorageError> {
        let exists = sqlx::query(
            r#"
            SELECT 1
            FROM short_urls
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .is_some();

        Ok(exists)
    }
}
