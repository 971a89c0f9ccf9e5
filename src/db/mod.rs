// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization
// - Fixture data loading (dev/test)

pub mod connection;
pub mod migrations;
pub mod seed;

pub use connection::{create_connection_pool, get_connection, ConnectionPool, PooledConn};

pub use migrations::initialize_database;

pub use seed::load_fixture_data;
