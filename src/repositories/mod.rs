// src/repositories/mod.rs
//
// Persistence layer - Record Store boundary

pub mod pokemon_repository;

pub use pokemon_repository::{PokemonRepository, SqlitePokemonRepository};
