// SPDX-License-Identifier: MPL-2.0
//! SQLite-backed product repository.
//!
//! Each language owns one table (`product_<code>`, see
//! [`Language::table_name`]). Both operations open their own connection and
//! release it before returning; there is no pool and no shared connection
//! state, so one user action maps to exactly one short-lived connection.
//!
//! The table name is interpolated into the SQL text, which is safe only
//! because it comes from the closed [`Language`] enum. The two free values
//! (name, description) are always bound parameters.

use crate::domain::{Language, Product};
use crate::error::StorageError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::PathBuf;

/// Opens a fresh connection to the database file and makes sure the
/// language's table exists.
///
/// The original deployment assumed pre-provisioned tables; bootstrapping
/// them here lets the viewer run against an empty database file.
async fn open(db_path: &PathBuf, language: Language) -> Result<SqliteConnection, StorageError> {
    // Anything that fails while establishing the connection is a
    // connection error, whatever sqlx variant it surfaces as.
    let mut conn = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .connect()
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL
        )",
        language.table_name()
    );
    sqlx::query(&ddl)
        .execute(&mut conn)
        .await
        .map_err(StorageError::from_sqlx)?;

    Ok(conn)
}

/// Fetches every product stored for `language`, in ascending-id order.
///
/// The order is the storage insertion order and is deterministic for a
/// fixed table state. An empty table yields `Ok(vec![])`, not an error.
pub async fn list_products(
    db_path: PathBuf,
    language: Language,
) -> Result<Vec<Product>, StorageError> {
    let mut conn = open(&db_path, language).await?;

    let sql = format!(
        "SELECT id, name, description FROM {} ORDER BY id",
        language.table_name()
    );
    let products = sqlx::query_as::<_, Product>(&sql)
        .fetch_all(&mut conn)
        .await
        .map_err(StorageError::from_sqlx)?;

    // Dropping the connection releases it on the error paths above.
    conn.close().await.map_err(StorageError::from_sqlx)?;

    Ok(products)
}

/// Inserts one product into the table for `language`. The id is assigned
/// by storage.
pub async fn insert_product(
    db_path: PathBuf,
    language: Language,
    name: String,
    description: String,
) -> Result<(), StorageError> {
    let mut conn = open(&db_path, language).await?;

    let sql = format!(
        "INSERT INTO {} (name, description) VALUES (?, ?)",
        language.table_name()
    );
    sqlx::query(&sql)
        .bind(&name)
        .bind(&description)
        .execute(&mut conn)
        .await
        .map_err(StorageError::from_sqlx)?;

    conn.close().await.map_err(StorageError::from_sqlx)?;

    Ok(())
}
