// src/state.rs

use sqlx::sqlite::SqlitePool;

use crate::contacts::{ContactStore, ListOrder};

/// Shared state handed to every request handler.
///
/// The pool is created once at startup and carried here as an explicit
/// storage handle; handlers never open their own connections.
#[derive(Clone)]
pub struct AppState {
    pub store: ContactStore,
    pub list_order: ListOrder,
}

pub fn create_app_state(pool: SqlitePool, list_order: ListOrder) -> AppState {
    AppState {
        store: ContactStore::new(pool),
        list_order,
    }
}
