// src/domain/display.rs
//
// Presentation shape derived from a stored record.
//
// Conversion in both directions is total over well-formed input. Fields the
// record does not retain (height, weight) default to zero rather than being
// re-fetched; they are excluded from round-trip equality.

use crate::domain::record::{PokemonRecord, StatEntry, TypeEntry};
use crate::error::CacheResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDisplay {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub types: Vec<TypeEntry>,
    pub stats: Vec<StatEntry>,
    /// Not retained in the record; always 0.
    pub height: u32,
    /// Not retained in the record; always 0.
    pub weight: u32,
}

impl PokemonDisplay {
    /// Decode a stored record into its display shape.
    ///
    /// Fails with `MalformedRecord` on a corrupt blob; the consumer is
    /// expected to render a degraded state, not crash.
    pub fn from_record(record: &PokemonRecord) -> CacheResult<Self> {
        Ok(Self {
            id: record.id,
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            types: record.decoded_types()?,
            stats: record.decoded_stats()?,
            height: 0,
            weight: 0,
        })
    }

    /// Re-encode the display shape into a storable record.
    pub fn to_record(&self) -> CacheResult<PokemonRecord> {
        PokemonRecord::new(
            self.id,
            self.name.clone(),
            self.image_url.clone(),
            &self.types,
            &self.stats,
        )
    }
}
