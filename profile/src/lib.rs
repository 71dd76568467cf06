//! Display-ready Pokemon profiles derived from PokeAPI records.
//!
//! This crate turns the three raw API responses for one Pokemon into a single
//! normalized [`PokemonProfile`], and tracks the outcome of searches.
//!
//! # Overview
//!
//! `pokedex-profile` sits between `pokedex-protocol` (wire format) and the client:
//!
//! ```text
//! pokedex-protocol (wire format)
//!        │
//!        ▼
//! pokedex-profile (domain types + derivation + tracking) ← THIS CRATE
//!        │
//!        └─> pokedex-client (HTTP fetch pipeline, terminal view)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - The 18 elemental types with their display colors
//! - [`StatEntry`], [`MoveEntry`], [`EvolutionStep`] - Profile rows
//! - [`PokemonProfile`] - The complete normalized record
//!
//! ## Derivation
//! - [`derive_profile`] - Build a profile from a pokemon record and its evolution chain
//! - [`flatten_chain`] - Walk an evolution tree along its first branch
//!
//! ## State Tracking
//! - [`SearchTracker`] - Idle / Fetching / Success / Error slot for the current search
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedex_profile::{derive_profile, type_color};
//! use pokedex_protocol::{parse_evolution_chain, parse_pokemon};
//!
//! let pokemon = parse_pokemon(&pokemon_body)?;
//! let chain = parse_evolution_chain(&chain_body)?;
//! let profile = derive_profile(&pokemon, &chain);
//!
//! for name in &profile.types {
//!     println!("{} {}", name, type_color(name));
//! }
//! ```

pub mod derive;
pub mod tracking;
pub mod types;

// Re-export main types at crate root for convenience
pub use derive::{derive_moves, derive_profile, flatten_chain};
pub use tracking::{RequestTicket, SearchState, SearchTracker, StalePolicy};
pub use types::{
    EvolutionStep, FALLBACK_COLOR, MAX_DISPLAYED_MOVES, MoveEntry, PokemonProfile, Rgb, STAT_MAX,
    StatEntry, Type, type_color,
};
