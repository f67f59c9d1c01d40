// src/db/migrations.rs
//
// Database schema initialization and migrations
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Idempotent operations

use crate::error::{CacheError, CacheResult};
use rusqlite::Connection;

/// Current schema version
/// Increment this when adding migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema.
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> CacheResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, 1)?;
        log::info!("database schema initialized at version 1");
    } else if current_version < CURRENT_SCHEMA_VERSION {
        // Future: apply incremental migrations here
        return Err(CacheError::Pool(format!(
            "schema version {} is outdated, expected {}; manual migration required",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(CacheError::Pool(format!(
            "schema version {} is newer than supported {}; update the application",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Get current schema version.
/// Returns 0 if the schema_version table doesn't exist (fresh database).
fn get_schema_version(conn: &Connection) -> CacheResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> CacheResult<()> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Version 1: the cached record table plus version tracking.
///
/// `types` and `stats` hold serialized JSON lists (see domain::record for
/// the encoding contract). `name` is stored lowercased and indexed for the
/// by-name lookup path.
fn apply_initial_schema(conn: &Connection) -> CacheResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER NOT NULL,
             applied_at TEXT NOT NULL DEFAULT (datetime('now'))
         );

         CREATE TABLE IF NOT EXISTS pokemon (
             id INTEGER PRIMARY KEY,
             name TEXT NOT NULL,
             image_url TEXT NOT NULL DEFAULT '',
             types TEXT NOT NULL,
             stats TEXT NOT NULL
         );

         CREATE INDEX IF NOT EXISTS idx_pokemon_name ON pokemon(name);",
    )?;

    Ok(())
}
