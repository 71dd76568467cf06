//! The normalized Pokemon profile

use super::moves::{MAX_DISPLAYED_MOVES, MoveEntry};
use super::stats::StatEntry;

/// One stage of an evolution chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionStep {
    /// Species name
    pub name: String,

    /// Level required to evolve into this stage, if evolution is level-based
    pub min_level: Option<u32>,
}

impl EvolutionStep {
    /// Create a step; a minimum level of 0 is treated as absent
    pub fn new(name: impl Into<String>, min_level: Option<u32>) -> Self {
        Self {
            name: name.into(),
            min_level: min_level.filter(|level| *level > 0),
        }
    }
}

/// Display-ready record for one Pokemon.
///
/// Built fresh from the API on every successful search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonProfile {
    /// National dex number
    pub id: u32,

    /// API name (lowercase, hyphenated)
    pub name: String,

    /// Type names in slot order
    pub types: Vec<String>,

    /// Base stats in API order
    pub stats: Vec<StatEntry>,

    /// All moves, sorted ascending by level
    pub moves: Vec<MoveEntry>,

    /// Official artwork URL
    pub image_url: Option<String>,

    pub height_m: f64,
    pub weight_kg: f64,

    /// Evolution chain from the base form
    pub evolutions: Vec<EvolutionStep>,
}

impl PokemonProfile {
    /// The first [`MAX_DISPLAYED_MOVES`] moves
    pub fn displayed_moves(&self) -> &[MoveEntry] {
        let end = self.moves.len().min(MAX_DISPLAYED_MOVES);
        &self.moves[..end]
    }

    /// Dex number padded to three digits, e.g. `#025`
    pub fn dex_number(&self) -> String {
        format!("#{:03}", self.id)
    }

    /// Name with its first letter uppercased
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| u32::from(s.value)).sum()
    }
}

/// Uppercase the first character of a name
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
