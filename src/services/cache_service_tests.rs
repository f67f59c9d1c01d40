// src/services/cache_service_tests.rs
//
// UNIT TESTS: Fetch-Through Cache
//
// INVARIANTS TESTED:
// - First get of an uncached name: exactly one remote call, one store write
// - Second get: zero remote calls, identical record
// - Clearing the store between gets forces an independent refetch
// - Blank input fails before any I/O
// - Remote failures propagate untouched and write nothing
// - Batch runs isolate per-item failures and filter blank names

#[cfg(test)]
mod cache_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use mockall::predicate::eq;
    use tempfile::TempDir;

    use crate::db::{create_connection_pool, initialize_database};
    use crate::error::CacheError;
    use crate::events::{EventBus, RecordCached};
    use crate::integrations::{ApiNamed, ApiPokemon, ApiSprites, ApiStat, ApiTypeSlot, MockRemoteSource};
    use crate::repositories::SqlitePokemonRepository;
    use crate::services::PokemonCacheService;

    fn payload(id: u32, name: &str) -> ApiPokemon {
        ApiPokemon {
            id: Some(id),
            name: Some(name.to_string()),
            sprites: ApiSprites {
                front_default: Some(format!("https://img.example/{}.png", id)),
            },
            types: vec![ApiTypeSlot {
                slot: 1,
                type_ref: ApiNamed {
                    name: "electric".to_string(),
                },
            }],
            stats: vec![ApiStat {
                base_stat: 35,
                stat: ApiNamed {
                    name: "hp".to_string(),
                },
            }],
        }
    }

    /// Wire a service over a fresh on-disk store and the given remote mock.
    /// The TempDir must stay alive for the duration of the test.
    fn service_with(remote: MockRemoteSource) -> (TempDir, PokemonCacheService, Arc<EventBus>) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("cache.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();

        let repo = Arc::new(SqlitePokemonRepository::new(Arc::new(pool)));
        let bus = Arc::new(EventBus::new());
        let service = PokemonCacheService::new(repo, Arc::new(remote), Arc::clone(&bus));

        (dir, service, bus)
    }

    #[tokio::test]
    async fn test_first_get_fetches_once_second_get_hits_cache() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_fetch_by_name()
            .with(eq("pikachu"))
            .times(1)
            .returning(|_| Ok(payload(25, "pikachu")));

        let (_dir, service, _bus) = service_with(remote);

        let first = service.get("pikachu").await.unwrap();
        let second = service.get("pikachu").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "pikachu");
        assert_eq!(service.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lookup_key_is_case_normalized() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_fetch_by_name()
            .with(eq("pikachu"))
            .times(1)
            .returning(|_| Ok(payload(25, "pikachu")));

        let (_dir, service, _bus) = service_with(remote);

        service.get("  Pikachu ").await.unwrap();
        // Different casing of the same name is the same cache key
        let hit = service.get("PIKACHU").await.unwrap();
        assert_eq!(hit.id, 25);
    }

    #[tokio::test]
    async fn test_clear_between_gets_forces_independent_refetch() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_fetch_by_name()
            .with(eq("pikachu"))
            .times(2)
            .returning(|_| Ok(payload(25, "pikachu")));

        let (_dir, service, _bus) = service_with(remote);

        service.get("pikachu").await.unwrap();
        service.clear().unwrap();
        service.get("pikachu").await.unwrap();

        assert_eq!(service.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_blank_name_rejected_before_any_io() {
        // No expectations: any remote call would fail the test
        let remote = MockRemoteSource::new();
        let (_dir, service, _bus) = service_with(remote);

        let err = service.get("   ").await.unwrap_err();
        assert!(matches!(err, CacheError::InvalidArgument(_)));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_propagates_and_writes_nothing() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_fetch_by_name()
            .times(1)
            .returning(|_| Err(CacheError::TransientFetch("connection refused".to_string())));

        let (_dir, service, _bus) = service_with(remote);

        let err = service.get("pikachu").await.unwrap_err();
        assert!(err.is_transient());
        // A failed single lookup surfaces the underlying error text
        assert!(err.to_string().contains("connection refused"));

        assert_eq!(service.count().unwrap(), 0);
        assert!(!service.exists("pikachu").unwrap());
    }

    #[tokio::test]
    async fn test_get_local_only_never_touches_network() {
        let remote = MockRemoteSource::new();
        let (_dir, service, _bus) = service_with(remote);

        assert!(service.get_local_only("pikachu").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_name_is_noop() {
        let remote = MockRemoteSource::new();
        let (_dir, service, _bus) = service_with(remote);

        service.delete("missingno").unwrap();
        assert!(!service.exists("missingno").unwrap());
    }

    #[tokio::test]
    async fn test_clear_then_list_all_is_empty() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_fetch_by_name()
            .returning(|name| Ok(payload(1, name)));

        let (_dir, service, _bus) = service_with(remote);

        service.get("bulbasaur").await.unwrap();
        service.clear().unwrap();

        assert!(service.list_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_batch_mixed_success_blank_and_not_found() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_fetch_by_name()
            .with(eq("pikachu"))
            .times(1)
            .returning(|_| Ok(payload(25, "pikachu")));
        remote
            .expect_fetch_by_name()
            .with(eq("notarealpokemon123"))
            .times(1)
            .returning(|name| Err(CacheError::NotFound(format!("no entry for '{}'", name))));

        let (_dir, service, _bus) = service_with(remote);

        let names = vec![
            "pikachu".to_string(),
            "".to_string(),
            "notarealpokemon123".to_string(),
        ];
        let outcome = service.fetch_all(&names).await;

        // Blank entry excluded from processing entirely
        assert_eq!(outcome.succeeded.len(), 1);
        assert_eq!(outcome.failed.len(), 1);

        assert_eq!(outcome.succeeded[0].name, "pikachu");

        let (failed_name, failed_err) = &outcome.failed[0];
        assert_eq!(failed_name, "notarealpokemon123");
        assert!(matches!(failed_err, CacheError::NotFound(_)));
        // No detail loss per item
        assert!(failed_err.to_string().contains("notarealpokemon123"));

        assert_eq!(outcome.summary(), "1 fetched, 1 failed");
    }

    #[tokio::test]
    async fn test_batch_with_all_failures_still_returns_outcome() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_fetch_by_name()
            .times(2)
            .returning(|name| Err(CacheError::NotFound(format!("no entry for '{}'", name))));

        let (_dir, service, _bus) = service_with(remote);

        let names = vec!["fakemon1".to_string(), "fakemon2".to_string()];
        let outcome = service.fetch_all(&names).await;

        assert!(outcome.succeeded.is_empty());
        assert_eq!(outcome.failed.len(), 2);
    }

    #[tokio::test]
    async fn test_batch_of_blanks_is_empty_outcome() {
        let remote = MockRemoteSource::new();
        let (_dir, service, _bus) = service_with(remote);

        let names = vec!["".to_string(), "   ".to_string()];
        let outcome = service.fetch_all(&names).await;

        assert!(outcome.succeeded.is_empty());
        assert!(outcome.failed.is_empty());
        assert_eq!(outcome.summary(), "0 fetched, 0 failed");
    }

    #[tokio::test]
    async fn test_record_cached_emitted_only_on_store_write() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_fetch_by_name()
            .times(1)
            .returning(|_| Ok(payload(25, "pikachu")));

        let (_dir, service, bus) = service_with(remote);

        let writes = Arc::new(AtomicUsize::new(0));
        let writes_clone = Arc::clone(&writes);
        bus.subscribe::<RecordCached, _>(move |_| {
            writes_clone.fetch_add(1, Ordering::SeqCst);
        });

        service.get("pikachu").await.unwrap();
        service.get("pikachu").await.unwrap();

        // One emission for the miss, none for the hit
        assert_eq!(writes.load(Ordering::SeqCst), 1);
    }
}
