// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        // The forum runs against a local, auto-created database file by
        // default; DATABASE_URL only needs to be set to point elsewhere.
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://forum.db".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            rust_log,
        }
    }
}
