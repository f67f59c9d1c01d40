// src/repositories/pokemon_repository.rs
//
// Cached record persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::{get_connection, ConnectionPool};
use crate::domain::PokemonRecord;
use crate::error::CacheResult;

/// Record Store boundary. All mutation is atomic per-call; SQLite provides
/// single-statement atomicity, so no extra locking is layered on top.
pub trait PokemonRepository: Send + Sync {
    /// Insert a record, replacing any prior row with the same `id` whole.
    fn insert_or_replace(&self, record: &PokemonRecord) -> CacheResult<()>;
    fn find_by_name(&self, name: &str) -> CacheResult<Option<PokemonRecord>>;
    /// Every cached record, ordered by id.
    fn find_all(&self) -> CacheResult<Vec<PokemonRecord>>;
    /// Idempotent: deleting an absent name is not an error.
    fn delete_by_name(&self, name: &str) -> CacheResult<()>;
    fn delete_all(&self) -> CacheResult<()>;
    fn exists(&self, name: &str) -> CacheResult<bool>;
    fn count(&self) -> CacheResult<i64>;
}

pub struct SqlitePokemonRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePokemonRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &Row) -> Result<PokemonRecord, rusqlite::Error> {
        Ok(PokemonRecord {
            id: row.get("id")?,
            name: row.get("name")?,
            image_url: row.get("image_url")?,
            types: row.get("types")?,
            stats: row.get("stats")?,
        })
    }
}

impl PokemonRepository for SqlitePokemonRepository {
    fn insert_or_replace(&self, record: &PokemonRecord) -> CacheResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT OR REPLACE INTO pokemon (id, name, image_url, types, stats)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.id,
                record.name,
                record.image_url,
                record.types,
                record.stats,
            ],
        )?;

        Ok(())
    }

    fn find_by_name(&self, name: &str) -> CacheResult<Option<PokemonRecord>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(
            "SELECT id, name, image_url, types, stats
             FROM pokemon WHERE name = ?1",
        )?;

        match stmt.query_row(params![name], Self::row_to_record) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn find_all(&self) -> CacheResult<Vec<PokemonRecord>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(
            "SELECT id, name, image_url, types, stats
             FROM pokemon
             ORDER BY id",
        )?;

        let records: Vec<PokemonRecord> = stmt
            .query_map([], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn delete_by_name(&self, name: &str) -> CacheResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute("DELETE FROM pokemon WHERE name = ?1", params![name])?;

        Ok(())
    }

    fn delete_all(&self) -> CacheResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute("DELETE FROM pokemon", [])?;

        Ok(())
    }

    fn exists(&self, name: &str) -> CacheResult<bool> {
        let conn = get_connection(&self.pool)?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM pokemon WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn count(&self) -> CacheResult<i64> {
        let conn = get_connection(&self.pool)?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))?;

        Ok(count)
    }
}
