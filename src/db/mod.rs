//! Database module: row mapping, schema and the download client store.
//!
//! Layout:
//! - `models.rs`: flat row struct and settings encode/decode
//! - `schema.rs`: SQL DDL for the `client` table (SQLite)
//! - `sqlite.rs`: `ClientStore` with list / find / upsert / delete

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::DbDownloadClient;
pub use schema::SQLITE_INIT;
pub use sqlite::{ClientStore, SqlitePool, UpsertOutcome};

use crate::error::ClientStoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open a pool for `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, ClientStoreError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    Ok(pool)
}
