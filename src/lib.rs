// src/lib.rs
// Pokecache - Fetch-through cache for Pokémon catalog data
//
// Architecture:
// - Record Store: sqlite-backed repository, keyed by id, queried by name
// - Remote Source: reqwest client over the public catalog API
// - Normalizer: remote payload → storable record (lists → JSON blobs)
// - Fetch-Through Cache: lookup-or-fetch-and-store with idempotent upsert
// - Batch Orchestrator: per-item failure isolation over a list of names
// - Events: every store mutation emits, so consumers can keep a live view

pub mod app;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{normalize_name, PokemonDisplay, PokemonRecord, StatEntry, TypeEntry};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{CacheError, CacheResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    BatchCompleted, CacheCleared, DomainEvent, EventBus, EventLogEntry, RecordCached,
    RecordDeleted,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, default_database_path, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{PokemonRepository, SqlitePokemonRepository};

// ============================================================================
// PUBLIC API - Remote catalog
// ============================================================================

pub use integrations::{ApiPokemon, PokeApiClient, RemoteSource};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{normalize, BatchOutcome, PokemonCacheService};

// ============================================================================
// PUBLIC API - Construction
// ============================================================================

pub use app::{build_cache, CacheApp, CacheConfig};
