//! Derivation of profiles from raw API records

mod evolution;
mod profile;

pub use evolution::flatten_chain;
pub use profile::{derive_moves, derive_profile};
