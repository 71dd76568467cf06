//! Learnable moves

/// How many moves a profile surfaces for display
pub const MAX_DISPLAYED_MOVES: usize = 8;

/// A move and the level it is learned at
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEntry {
    pub name: String,

    /// Always at least 1
    pub level: u32,
}

impl MoveEntry {
    /// Create a move entry; a level of 0 is stored as 1
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level: level.max(1),
        }
    }
}
