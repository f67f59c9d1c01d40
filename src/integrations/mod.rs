// src/integrations/mod.rs
//
// External integrations - remote catalog access

pub mod pokeapi;
pub mod remote_source;

pub use pokeapi::PokeApiClient;
pub use remote_source::{ApiNamed, ApiPokemon, ApiSprites, ApiStat, ApiTypeSlot, RemoteSource};

#[cfg(test)]
pub use remote_source::MockRemoteSource;
