// src/config/mod.rs

use once_cell::sync::Lazy;
use std::str::FromStr;

use crate::contacts::ListOrder;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: u32,

    // ── Contact Listing
    pub list_order: ListOrder,

    // ── Seed Binary Configuration
    pub seed_contact_count: u32,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        let _ = dotenv::dotenv();

        Self {
            host: env_var_or("CONTACTS_HOST", "0.0.0.0".to_string()),
            port: env_var_or("PORT", 5000),
            database_url: env_var_or("DATABASE_URL", "sqlite:contacts.db?mode=rwc".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
            list_order: env_var_or("CONTACTS_LIST_ORDER", ListOrder::NewestFirst),
            seed_contact_count: env_var_or("SEED_CONTACT_COUNT", 10),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);
