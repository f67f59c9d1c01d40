// src/app/mod.rs
//
// Construction and wiring.
//
// The store handle, remote client, and event bus are built here and passed
// down explicitly. Lifecycle belongs to whatever embeds the crate; there is
// no process-wide singleton.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::db::{create_connection_pool, default_database_path, initialize_database};
use crate::error::CacheResult;
use crate::events::EventBus;
use crate::integrations::pokeapi::client::DEFAULT_BASE_URL;
use crate::integrations::PokeApiClient;
use crate::repositories::SqlitePokemonRepository;
use crate::services::PokemonCacheService;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Database file location. `None` resolves to the per-user data dir.
    pub db_path: Option<PathBuf>,
    pub api_base_url: String,
    pub http_timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(30),
        }
    }
}

/// Fully wired cache stack. All fields are Arc-backed and cheap to share.
pub struct CacheApp {
    pub service: PokemonCacheService,
    pub event_bus: Arc<EventBus>,
}

/// Build the cache stack: pool, schema, repository, remote client, bus.
pub fn build_cache(config: CacheConfig) -> CacheResult<CacheApp> {
    let db_path = match config.db_path {
        Some(path) => path,
        None => default_database_path()?,
    };

    let pool = create_connection_pool(&db_path)?;
    let conn = pool.get().map_err(crate::error::CacheError::from)?;
    initialize_database(&conn)?;
    drop(conn);

    let repo = Arc::new(SqlitePokemonRepository::new(Arc::new(pool)));
    let remote = Arc::new(PokeApiClient::with_base_url(
        config.api_base_url,
        config.http_timeout,
    )?);
    let event_bus = Arc::new(EventBus::new());

    let service = PokemonCacheService::new(repo, remote, Arc::clone(&event_bus));

    Ok(CacheApp { service, event_bus })
}
