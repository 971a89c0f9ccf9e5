// src/config.rs
//
// Environment-driven server configuration.
//
// BOARDHUB_ADDR      - bind address (default 127.0.0.1:8080)
// BOARDHUB_DB        - SQLite database path (default ./boardhub.db)
// BOARDHUB_POOL_SIZE - connection pool size (default 8)
// BOARDHUB_SEED      - set to 1/true to load the fixture dataset at boot

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub pool_size: u32,
    pub seed_fixture: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("static default addr"),
            db_path: PathBuf::from("boardhub.db"),
            pool_size: 8,
            seed_fixture: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("BOARDHUB_ADDR") {
            config.bind_addr = raw
                .parse()
                .map_err(|_| AppError::Other(format!("Invalid BOARDHUB_ADDR: {}", raw)))?;
        }
        if let Ok(raw) = std::env::var("BOARDHUB_DB") {
            config.db_path = PathBuf::from(raw);
        }
        if let Ok(raw) = std::env::var("BOARDHUB_POOL_SIZE") {
            config.pool_size = raw
                .parse()
                .map_err(|_| AppError::Other(format!("Invalid BOARDHUB_POOL_SIZE: {}", raw)))?;
        }
        if let Ok(raw) = std::env::var("BOARDHUB_SEED") {
            config.seed_fixture = raw == "1" || raw.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}
