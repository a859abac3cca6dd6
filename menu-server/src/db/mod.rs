//! Database access layer
//!
//! Free functions over sqlx executors, grouped by table family. Reads that
//! belong to one request take `&mut SqliteConnection` so they can run inside
//! the request's [`UnitOfWork`].

pub mod catalog;
pub mod orders;
pub mod sessions;

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqlitePool, SqlitePoolOptions,
    SqliteSynchronous,
};
use sqlx::{Sqlite, Transaction};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Open the pool and apply embedded migrations
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, BoxError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database ready (SQLite WAL, migrations applied)");
    Ok(pool)
}

/// One atomic request: every write goes through the wrapped transaction.
///
/// Dropping without [`UnitOfWork::commit`] rolls back all writes.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    /// Read-only unit of work (deferred transaction, consistent snapshot)
    pub async fn begin(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        Ok(Self {
            tx: pool.begin().await?,
        })
    }

    /// Unit of work that reads then writes.
    ///
    /// Takes the write lock at `BEGIN` so concurrent writers queue on the busy
    /// timeout instead of failing the read → write lock upgrade.
    pub async fn begin_write(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        Ok(Self {
            tx: pool.begin_with("BEGIN IMMEDIATE").await?,
        })
    }

    /// Connection bound to this unit of work
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}

/// Parse a money column
pub(crate) fn decimal_column(raw: &str, column: &str) -> Result<Decimal, BoxError> {
    shared::money::parse_money(raw).map_err(|e| format!("invalid decimal in {column}: {e}").into())
}

/// Unix millis → UTC timestamp
pub(crate) fn datetime_from_millis(
    millis: i64,
) -> Result<chrono::DateTime<chrono::Utc>, BoxError> {
    chrono::DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| format!("timestamp out of range: {millis}").into())
}
