// src/domain/record.rs
//
// The canonical cached representation of one catalog entity.
//
// The `types` and `stats` fields hold JSON blobs rather than decoded lists.
// This is a deliberate normalization boundary: the row stays flat for the
// store while the nested lists keep their full shape. Encoding contract:
// serde_json of `Vec<TypeEntry>` / `Vec<StatEntry>`, lossless round-trip.

use crate::error::{CacheError, CacheResult};
use serde::{Deserialize, Serialize};

/// One `{slot, type_name}` pair from the catalog's type list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub slot: u32,
    pub type_name: String,
}

/// One `{stat_name, base_value}` pair from the catalog's stat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub stat_name: String,
    pub base_value: i64,
}

/// Cached catalog entity. Immutable once written except via whole-row
/// replacement keyed on `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    /// Lowercased lookup key.
    pub name: String,
    /// Possibly empty if the catalog carries no default sprite.
    pub image_url: String,
    /// JSON blob of `Vec<TypeEntry>`.
    pub types: String,
    /// JSON blob of `Vec<StatEntry>`.
    pub stats: String,
}

impl PokemonRecord {
    pub fn new(
        id: u32,
        name: String,
        image_url: String,
        types: &[TypeEntry],
        stats: &[StatEntry],
    ) -> CacheResult<Self> {
        Ok(Self {
            id,
            name,
            image_url,
            types: serde_json::to_string(types)?,
            stats: serde_json::to_string(stats)?,
        })
    }

    /// Decode the type blob. A corrupt blob is a recoverable read error.
    pub fn decoded_types(&self) -> CacheResult<Vec<TypeEntry>> {
        serde_json::from_str(&self.types).map_err(|e| {
            CacheError::MalformedRecord(format!("types blob of '{}': {}", self.name, e))
        })
    }

    /// Decode the stat blob. A corrupt blob is a recoverable read error.
    pub fn decoded_stats(&self) -> CacheResult<Vec<StatEntry>> {
        serde_json::from_str(&self.stats).map_err(|e| {
            CacheError::MalformedRecord(format!("stats blob of '{}': {}", self.name, e))
        })
    }
}

/// Canonical form of a lookup key: trimmed and lowercased.
///
/// Rejects blank input before any I/O happens.
pub fn normalize_name(name: &str) -> CacheResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CacheError::InvalidArgument(
            "lookup name must not be blank".to_string(),
        ));
    }
    Ok(trimmed.to_lowercase())
}
