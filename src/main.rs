// src/main.rs

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use contacts_web::config::CONFIG;
use contacts_web::{db, server, state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting contacts server");
    info!("Database: {}", CONFIG.database_url);
    info!("Listing order: {:?}", CONFIG.list_order);

    // Create database pool and ensure the schema exists. Either failure is
    // fatal: serving without a reachable contacts table is a broken state.
    let pool = db::create_pool(&CONFIG.database_url, CONFIG.sqlite_max_connections).await?;
    db::init_schema(&pool).await?;

    let app_state = Arc::new(state::create_app_state(pool, CONFIG.list_order));

    let app = server::router(app_state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Contacts server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
