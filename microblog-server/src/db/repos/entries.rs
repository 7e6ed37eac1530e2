//! Entry repository
//!
//! - list: newest first, optionally filtered by exact category
//! - categories: distinct values across all rows, ascending
//! - insert/update/delete: one committed transaction each

use sqlx::{Connection, SqliteConnection};

use crate::db::DbError;
use crate::models::{Entry, EntryId, NewEntry};

/// Entry repository
pub struct EntryRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> EntryRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// List entries by descending id.
    ///
    /// `Some("")` is a real filter and only matches entries with an
    /// empty category.
    pub async fn list(&mut self, category: Option<&str>) -> Result<Vec<Entry>, DbError> {
        let entries = match category {
            Some(category) => {
                sqlx::query_as::<_, Entry>(
                    "SELECT id, title, category, text FROM entries WHERE category = ? ORDER BY id DESC",
                )
                .bind(category)
                .fetch_all(&mut *self.conn)
                .await?
            }
            None => {
                sqlx::query_as::<_, Entry>(
                    "SELECT id, title, category, text FROM entries ORDER BY id DESC",
                )
                .fetch_all(&mut *self.conn)
                .await?
            }
        };

        Ok(entries)
    }

    /// Distinct categories across all entries, for the category chooser.
    pub async fn categories(&mut self) -> Result<Vec<String>, DbError> {
        let categories =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM entries ORDER BY category")
                .fetch_all(&mut *self.conn)
                .await?;

        Ok(categories)
    }

    /// Insert an entry, returning the id assigned by the database.
    pub async fn insert(&mut self, entry: &NewEntry) -> Result<EntryId, DbError> {
        let mut tx = self.conn.begin().await?;
        let result = sqlx::query("INSERT INTO entries (title, category, text) VALUES (?, ?, ?)")
            .bind(&entry.title)
            .bind(&entry.category)
            .bind(&entry.text)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(EntryId::from(result.last_insert_rowid()))
    }

    /// Replace the content of an entry. Returns the number of rows changed
    /// (0 when no entry has this id).
    pub async fn update(&mut self, id: EntryId, entry: &NewEntry) -> Result<u64, DbError> {
        let mut tx = self.conn.begin().await?;
        let result = sqlx::query("UPDATE entries SET title = ?, category = ?, text = ? WHERE id = ?")
            .bind(&entry.title)
            .bind(&entry.category)
            .bind(&entry.text)
            .bind(id.get())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected())
    }

    /// Delete an entry. Returns the number of rows removed (0 when no entry
    /// has this id).
    pub async fn delete(&mut self, id: EntryId) -> Result<u64, DbError> {
        let mut tx = self.conn.begin().await?;
        let result = sqlx::query("DELETE FROM entries WHERE id = ?")
            .bind(id.get())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
