// src/contacts/seed.rs

//! Test-data population used by the standalone seed binary.

use anyhow::Result;
use sqlx::sqlite::SqlitePool;
use tracing::{info, warn};

/// Insert `count` deterministically-named test contacts and return the
/// number of `Test Name %` rows present afterwards.
pub async fn seed_contacts(pool: &SqlitePool, count: u32) -> Result<i64> {
    let table_exists: Option<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'contacts'",
    )
    .fetch_optional(pool)
    .await?;

    if table_exists.is_none() {
        warn!("'contacts' table does not exist; inserts will fail");
    }

    info!("Generating {} test contacts", count);
    for i in 0..count {
        let name = format!("Test Name {}", i);
        let phone = format!("123-456-789{}", i);
        sqlx::query("INSERT INTO contacts (name, phone) VALUES (?, ?)")
            .bind(&name)
            .bind(&phone)
            .execute(pool)
            .await?;
    }

    // Verify insertion
    let found: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE name LIKE 'Test Name %'")
        .fetch_one(pool)
        .await?;

    if found != count as i64 {
        warn!(
            "Expected {} test contacts but found {} after insert",
            count, found
        );
    }

    Ok(found)
}
