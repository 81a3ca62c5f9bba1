// src/contacts/types.rs

use std::str::FromStr;

/// A persisted contact row. Rows are never updated in place: they are
/// created by an add (manual, random, or seed) and destroyed by a delete.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

/// Listing order for the contacts table.
///
/// An explicit configuration choice: newest-first (id descending) is the
/// default, oldest-first (id ascending) is available via config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    NewestFirst,
    OldestFirst,
}

impl ListOrder {
    pub(crate) fn sql_order(self) -> &'static str {
        match self {
            ListOrder::NewestFirst => "DESC",
            ListOrder::OldestFirst => "ASC",
        }
    }
}

impl FromStr for ListOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest_first" => Ok(ListOrder::NewestFirst),
            "oldest_first" => Ok(ListOrder::OldestFirst),
            other => Err(format!("unknown list order: {}", other)),
        }
    }
}
