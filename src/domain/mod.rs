// src/domain/mod.rs
//
// Domain Module - cached catalog entities and their presentation shape

pub mod display;
pub mod record;

pub use display::PokemonDisplay;
pub use record::{normalize_name, PokemonRecord, StatEntry, TypeEntry};
