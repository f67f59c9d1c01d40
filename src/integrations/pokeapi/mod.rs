// src/integrations/pokeapi/mod.rs

pub mod client;

pub use client::PokeApiClient;
