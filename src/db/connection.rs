// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Pool handles are constructed by the embedding process and passed down;
//   there is no process-wide database singleton

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::{Path, PathBuf};

use crate::error::{CacheError, CacheResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Default database file path: {APP_DATA}/pokecache/pokecache.db
pub fn default_database_path() -> CacheResult<PathBuf> {
    let app_data_dir = dirs::data_dir().ok_or_else(|| {
        CacheError::Pool("could not determine app data directory".to_string())
    })?;

    let cache_dir = app_data_dir.join("pokecache");
    std::fs::create_dir_all(&cache_dir)?;

    Ok(cache_dir.join("pokecache.db"))
}

/// Create a connection pool at an explicit path.
///
/// Pool configuration:
/// - Max 8 connections
/// - WAL mode for read/write concurrency
/// - Busy timeout so concurrent writers queue instead of erroring
pub fn create_connection_pool(db_path: &Path) -> CacheResult<ConnectionPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(8)
        .build(manager)
        .map_err(|e| CacheError::Pool(format!("failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool with a clearer error message.
pub fn get_connection(pool: &ConnectionPool) -> CacheResult<PooledConn> {
    pool.get()
        .map_err(|e| CacheError::Pool(format!("failed to get database connection: {}", e)))
}
