// src/lib.rs

pub mod config;
pub mod contacts;
pub mod db;
pub mod server;
pub mod state;
