//! Schema for the entries table

use std::path::Path;

use sqlx::{Connection, SqliteConnection, SqlitePool};

use super::{connect_options, DbError};

/// Recreates the table from scratch. Existing entries are lost.
const RESET_SCHEMA: &str = r#"
DROP TABLE IF EXISTS entries;
CREATE TABLE entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    text TEXT NOT NULL
);
"#;

const CREATE_IF_MISSING: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    text TEXT NOT NULL
);
"#;

/// Drop and recreate the entries table in the database at `path`.
///
/// Runs outside the request path on its own connection, which is
/// closed before returning.
pub async fn init_schema(path: &Path) -> Result<(), DbError> {
    let mut conn = SqliteConnection::connect_with(&connect_options(path)).await?;

    let mut tx = conn.begin().await?;
    sqlx::raw_sql(RESET_SCHEMA).execute(&mut *tx).await?;
    tx.commit().await?;

    conn.close().await?;
    tracing::info!(path = %path.display(), "database initialized");
    Ok(())
}

/// Create the entries table if it doesn't exist yet. Never drops data.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::raw_sql(CREATE_IF_MISSING).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use crate::Settings;

    #[tokio::test]
    async fn init_resets_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.db");
        init_schema(&path).await.unwrap();

        let settings = Settings {
            database: path.clone(),
            ..Settings::default()
        };
        let pool = create_pool(&settings).await.unwrap();
        sqlx::query("INSERT INTO entries (title, category, text) VALUES ('a', 'b', 'c')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        init_schema(&path).await.unwrap();

        let pool = create_pool(&settings).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn ensure_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            database: dir.path().join("schema.db"),
            ..Settings::default()
        };
        let pool = create_pool(&settings).await.unwrap();

        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO entries (title, category, text) VALUES ('a', 'b', 'c')")
            .execute(&pool)
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
