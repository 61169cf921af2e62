// src/db/mod.rs

//! Connection pool setup and schema migrations.

pub mod seed;

use crate::config::AppConfig;
use crate::errors::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

pub type DbPool = Pool<Sqlite>;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub async fn init_pool(config: &AppConfig) -> Result<DbPool> {
  connect(&config.database_url, config.db_max_connections, config.db_acquire_timeout).await
}

/// Opens a pool with foreign-key enforcement switched on for every connection.
///
/// An in-memory database lives only as long as its connection, so for those
/// URLs the pool holds exactly one connection that is never reaped.
pub async fn connect(database_url: &str, max_connections: u32, acquire_timeout: Duration) -> Result<DbPool> {
  let options = SqliteConnectOptions::from_str(database_url)?
    .foreign_keys(true)
    .create_if_missing(true);

  let pool_options = if is_in_memory(database_url) {
    tracing::debug!("In-memory database requested, pinning pool to a single connection");
    SqlitePoolOptions::new()
      .max_connections(1)
      .min_connections(1)
      .idle_timeout(None)
      .max_lifetime(None)
  } else {
    SqlitePoolOptions::new().max_connections(max_connections)
  };

  let pool = pool_options
    .acquire_timeout(acquire_timeout)
    .connect_with(options)
    .await?;
  Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> Result<()> {
  MIGRATOR.run(pool).await?;
  tracing::info!("Database migrations applied.");
  Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
  database_url.contains(":memory:") || database_url.contains("mode=memory")
}
