// src/integrations/pokeapi/client.rs
//
// PokeAPI client
//
// ARCHITECTURE:
// - REST client for the public Pokémon catalog
// - Maps external failures → error taxonomy (NO domain knowledge)
// - Used by the cache service through the RemoteSource trait
//
// This is INFRASTRUCTURE, not DOMAIN: it returns raw payloads that the
// normalizer maps into storable records.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::{CacheError, CacheResult};
use crate::integrations::remote_source::{ApiPokemon, RemoteSource};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PokeApiClient {
    base_url: String,
    http_client: Client,
}

impl PokeApiClient {
    pub fn new() -> CacheResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Create a client against an explicit endpoint, for alternate catalog
    /// deployments and for tests.
    pub fn with_base_url(base_url: String, timeout: Duration) -> CacheResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CacheError::TransientFetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }
}

#[async_trait]
impl RemoteSource for PokeApiClient {
    async fn fetch_by_name(&self, name: &str) -> CacheResult<ApiPokemon> {
        let url = self.pokemon_url(name);
        log::debug!("fetching {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CacheError::TransientFetch(format!("catalog request failed: {}", e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(CacheError::NotFound(format!(
                    "catalog has no entry for '{}'",
                    name
                )));
            }
            status if !status.is_success() => {
                return Err(CacheError::TransientFetch(format!(
                    "catalog returned status {}",
                    status
                )));
            }
            _ => {}
        }

        response
            .json::<ApiPokemon>()
            .await
            .map_err(|e| CacheError::MalformedResponse(format!("undecodable catalog body: {}", e)))
    }
}
