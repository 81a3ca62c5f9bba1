// src/contacts/mod.rs
pub mod random;
pub mod seed;
pub mod store;
pub mod types;

// Re-export for easy use elsewhere
pub use store::ContactStore;
pub use types::{Contact, ListOrder};
