// src/services/normalizer.rs
//
// Converts the remote catalog shape into the storable record shape.
//
// The nested type and stat lists are flattened into the record's JSON blob
// fields here; this is the only place that crosses from API shape to row
// shape. Identity fields are required; everything else degrades to a
// documented default.

use crate::domain::{PokemonRecord, StatEntry, TypeEntry};
use crate::error::{CacheError, CacheResult};
use crate::integrations::ApiPokemon;

/// Map a raw catalog payload to a storable record.
///
/// Fails with `MalformedResponse` when the payload lacks its identity
/// fields. A missing default sprite becomes an empty image URL.
pub fn normalize(payload: &ApiPokemon) -> CacheResult<PokemonRecord> {
    let id = payload
        .id
        .ok_or_else(|| CacheError::MalformedResponse("payload missing 'id'".to_string()))?;

    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CacheError::MalformedResponse("payload missing 'name'".to_string()))?
        .to_lowercase();

    let image_url = payload
        .sprites
        .front_default
        .clone()
        .unwrap_or_default();

    let types: Vec<TypeEntry> = payload
        .types
        .iter()
        .map(|t| TypeEntry {
            slot: t.slot,
            type_name: t.type_ref.name.clone(),
        })
        .collect();

    let stats: Vec<StatEntry> = payload
        .stats
        .iter()
        .map(|s| StatEntry {
            stat_name: s.stat.name.clone(),
            base_value: s.base_stat,
        })
        .collect();

    PokemonRecord::new(id, name, image_url, &types, &stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::{ApiNamed, ApiSprites, ApiStat, ApiTypeSlot};

    fn full_payload() -> ApiPokemon {
        ApiPokemon {
            id: Some(25),
            name: Some("pikachu".to_string()),
            sprites: ApiSprites {
                front_default: Some("https://img.example/25.png".to_string()),
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

    #[test]
    fn test_normalize_maps_identity_and_blobs() {
        let record = normalize(&full_payload()).unwrap();

        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.image_url, "https://img.example/25.png");

        let types = record.decoded_types().unwrap();
        assert_eq!(types[0].slot, 1);
        assert_eq!(types[0].type_name, "electric");

        let stats = record.decoded_stats().unwrap();
        assert_eq!(stats[0].stat_name, "hp");
        assert_eq!(stats[0].base_value, 35);
    }

    #[test]
    fn test_missing_id_is_malformed_response() {
        let mut payload = full_payload();
        payload.id = None;

        let err = normalize(&payload).unwrap_err();
        assert!(matches!(err, CacheError::MalformedResponse(_)));
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_missing_or_blank_name_is_malformed_response() {
        let mut payload = full_payload();
        payload.name = None;
        assert!(matches!(
            normalize(&payload),
            Err(CacheError::MalformedResponse(_))
        ));

        payload.name = Some("   ".to_string());
        assert!(matches!(
            normalize(&payload),
            Err(CacheError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_missing_sprite_becomes_empty_image_url() {
        let mut payload = full_payload();
        payload.sprites = ApiSprites::default();

        let record = normalize(&payload).unwrap();
        assert_eq!(record.image_url, "");
    }

    #[test]
    fn test_name_is_lowercased() {
        let mut payload = full_payload();
        payload.name = Some("Pikachu".to_string());

        let record = normalize(&payload).unwrap();
        assert_eq!(record.name, "pikachu");
    }

    #[test]
    fn test_empty_lists_serialize_to_empty_arrays() {
        let mut payload = full_payload();
        payload.types.clear();
        payload.stats.clear();

        let record = normalize(&payload).unwrap();
        assert!(record.decoded_types().unwrap().is_empty());
        assert!(record.decoded_stats().unwrap().is_empty());
    }
}
