// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod cache_service;
pub mod normalizer;

#[cfg(test)]
mod cache_service_tests;

pub use cache_service::{BatchOutcome, PokemonCacheService};
pub use normalizer::normalize;
