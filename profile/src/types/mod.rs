//! Domain types for Pokemon profiles

mod color;
mod moves;
mod pokemon_type;
mod profile;
mod stats;

pub use color::Rgb;
pub use moves::{MAX_DISPLAYED_MOVES, MoveEntry};
pub use pokemon_type::{FALLBACK_COLOR, Type, type_color};
pub use profile::{EvolutionStep, PokemonProfile, capitalize};
pub use stats::{STAT_MAX, StatEntry};
