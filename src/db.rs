use std::{path::Path, time::Duration};

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
    Connection, SqliteConnection,
};
use tracing::{debug, warn};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        username TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL,
        email TEXT NOT NULL,
        role TEXT DEFAULT 'user',
        profile TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Handle to the SQLite file. Every data-layer operation acquires its own
/// connection and hands it back through [`Database::release`]; there is no pool.
#[derive(Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));
        Self { options }
    }

    pub async fn acquire(&self) -> Result<SqliteConnection, sqlx::Error> {
        SqliteConnection::connect_with(&self.options).await
    }

    pub async fn release(conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            warn!(error = %e, "closing sqlite connection failed");
        }
    }

    /// Create the users table if it is missing. Safe to call on every start.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        let mut conn = self.acquire().await.context("open database")?;
        let result = sqlx::query(CREATE_USERS_TABLE).execute(&mut conn).await;
        Self::release(conn).await;
        result.context("create users table")?;
        debug!("users schema ready");
        Ok(())
    }
}
