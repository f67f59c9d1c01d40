// src/services/cache_service.rs
//
// Fetch-through cache over the record store and the remote catalog.
//
// Lookup-or-fetch-and-store: a hit returns the stored row untouched; a miss
// fetches from the catalog, normalizes, persists exactly once, and returns
// the stored shape. Remote and store errors propagate to the caller as-is;
// there is no internal retry and no stale fallback.
//
// Concurrent `get` calls for distinct names run independently. For the same
// name there is no per-key in-flight dedup: duplicate fetches may both hit
// the network and both write, with the later write winning the row.

use std::sync::Arc;

use crate::domain::{normalize_name, PokemonRecord};
use crate::error::{CacheError, CacheResult};
use crate::events::{BatchCompleted, CacheCleared, EventBus, RecordCached, RecordDeleted};
use crate::integrations::RemoteSource;
use crate::repositories::PokemonRepository;
use crate::services::normalizer;

/// Result of a batch run. Per-item failures are collected, never raised;
/// both lists may be empty. Order within each list is completion order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub succeeded: Vec<PokemonRecord>,
    pub failed: Vec<(String, CacheError)>,
}

impl BatchOutcome {
    /// Consumer-facing one-liner, e.g. "3 fetched, 1 failed".
    pub fn summary(&self) -> String {
        format!("{} fetched, {} failed", self.succeeded.len(), self.failed.len())
    }
}

pub struct PokemonCacheService {
    repo: Arc<dyn PokemonRepository>,
    remote: Arc<dyn RemoteSource>,
    event_bus: Arc<EventBus>,
}

impl Clone for PokemonCacheService {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            remote: Arc::clone(&self.remote),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl PokemonCacheService {
    pub fn new(
        repo: Arc<dyn PokemonRepository>,
        remote: Arc<dyn RemoteSource>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            repo,
            remote,
            event_bus,
        }
    }

    /// Look up `name`, fetching and persisting it on a miss.
    ///
    /// Blank names fail with `InvalidArgument` before any I/O. A hit
    /// performs no network call and no write; a miss performs exactly one
    /// of each.
    pub async fn get(&self, name: &str) -> CacheResult<PokemonRecord> {
        let key = normalize_name(name)?;

        if let Some(record) = self.repo.find_by_name(&key)? {
            log::debug!("cache hit for '{}'", key);
            return Ok(record);
        }

        log::debug!("cache miss for '{}', fetching from catalog", key);
        let payload = self.remote.fetch_by_name(&key).await?;
        let record = normalizer::normalize(&payload)?;
        self.repo.insert_or_replace(&record)?;

        self.event_bus
            .emit(RecordCached::new(record.id, record.name.clone()));

        Ok(record)
    }

    /// Store lookup only; never touches the network.
    pub fn get_local_only(&self, name: &str) -> CacheResult<Option<PokemonRecord>> {
        let key = normalize_name(name)?;
        self.repo.find_by_name(&key)
    }

    pub fn exists(&self, name: &str) -> CacheResult<bool> {
        let key = normalize_name(name)?;
        self.repo.exists(&key)
    }

    /// Idempotent: deleting an absent name is not an error.
    pub fn delete(&self, name: &str) -> CacheResult<()> {
        let key = normalize_name(name)?;
        self.repo.delete_by_name(&key)?;
        self.event_bus.emit(RecordDeleted::new(key));
        Ok(())
    }

    /// Drop every cached record.
    pub fn clear(&self) -> CacheResult<()> {
        self.repo.delete_all()?;
        self.event_bus.emit(CacheCleared::new());
        Ok(())
    }

    /// Every cached record in store enumeration order (by id).
    pub fn list_all(&self) -> CacheResult<Vec<PokemonRecord>> {
        self.repo.find_all()
    }

    pub fn count(&self) -> CacheResult<i64> {
        self.repo.count()
    }

    /// Drive `get` over a list of names, isolating per-item failures.
    ///
    /// Blank names are filtered out before processing and appear in neither
    /// result list. The remaining names are fetched concurrently; once
    /// started, every fetch runs to completion regardless of other items'
    /// outcomes. Result order is completion order.
    pub async fn fetch_all(&self, names: &[String]) -> BatchOutcome {
        let mut tasks = tokio::task::JoinSet::new();

        for name in names {
            if name.trim().is_empty() {
                continue;
            }
            let service = self.clone();
            let name = name.clone();
            tasks.spawn(async move {
                let result = service.get(&name).await;
                (name, result)
            });
        }

        let mut outcome = BatchOutcome::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(record))) => outcome.succeeded.push(record),
                Ok((name, Err(err))) => {
                    log::warn!("batch item '{}' failed: {}", name, err);
                    outcome.failed.push((name, err));
                }
                Err(join_err) => {
                    // A panicking fetch task loses its name attribution;
                    // it can only come from a bug, not from item failure.
                    log::error!("batch fetch task panicked: {}", join_err);
                }
            }
        }

        self.event_bus.emit(BatchCompleted::new(
            outcome.succeeded.len(),
            outcome.failed.len(),
        ));

        outcome
    }
}
