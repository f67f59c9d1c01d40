// src/integrations/remote_source.rs
//
// Remote catalog boundary.
//
// One read-only operation is consumed: fetch a canonical record by name.
// Failure modes (not-found, transient network error, malformed payload) are
// mapped to the error taxonomy here and passed through the cache untouched.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::CacheResult;

/// Raw catalog payload for one entity.
///
/// Identity fields are optional on purpose: the normalizer owns the
/// required-field check and reports which field was missing. Unknown
/// remote fields are ignored, so new upstream fields never break parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: Option<u32>,
    pub name: Option<String>,
    #[serde(default)]
    pub sprites: ApiSprites,
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    #[serde(default)]
    pub stats: Vec<ApiStat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: ApiNamed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiStat {
    pub base_stat: i64,
    pub stat: ApiNamed,
}

/// The catalog's `{name, url}` resource reference, reduced to the name.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiNamed {
    pub name: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch_by_name(&self, name: &str) -> CacheResult<ApiPokemon>;
}
