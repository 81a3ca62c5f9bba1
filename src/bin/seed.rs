// src/bin/seed.rs

//! Standalone test-data generator. Inserts a fixed count of synthetic
//! contacts into the same database file the server uses, then verifies the
//! count. Run with no arguments: `cargo run --bin seed`.

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use contacts_web::config::CONFIG;
use contacts_web::contacts::seed::seed_contacts;
use contacts_web::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Connecting to database: {}", CONFIG.database_url);
    let pool = db::create_pool(&CONFIG.database_url, 1).await?;

    let found = seed_contacts(&pool, CONFIG.seed_contact_count).await?;
    info!(
        "{} test contacts committed ({} 'Test Name %' rows present)",
        CONFIG.seed_contact_count, found
    );

    Ok(())
}
