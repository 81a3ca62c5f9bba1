// src/contacts/store.rs

//! Data access layer for the contacts table.
//!
//! Every operation checks a connection out of the shared pool for the
//! duration of one statement; release is guaranteed on every exit path.

use anyhow::Result;
use sqlx::sqlite::SqlitePool;

use super::types::{Contact, ListOrder};

#[derive(Clone)]
pub struct ContactStore {
    pool: SqlitePool,
}

impl ContactStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch all contacts in the given order.
    pub async fn list(&self, order: ListOrder) -> Result<Vec<Contact>> {
        let query = format!(
            "SELECT id, name, phone FROM contacts ORDER BY id {}",
            order.sql_order()
        );

        let contacts = sqlx::query_as::<_, Contact>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(contacts)
    }

    /// Insert one contact and return the stored row.
    pub async fn add(&self, name: &str, phone: &str) -> Result<Contact> {
        let result = sqlx::query("INSERT INTO contacts (name, phone) VALUES (?, ?)")
            .bind(name)
            .bind(phone)
            .execute(&self.pool)
            .await?;

        Ok(Contact {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }

    /// Delete the contact with the given id, returning the number of rows
    /// removed. Deleting a non-existent id is a silent no-op (returns 0).
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete every contact unconditionally, returning the number removed.
    pub async fn clear_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM contacts")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count all contacts.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
