//! Base stats

/// Upper bound used to scale stat bars.
///
/// The API does not enforce it; larger values saturate the bar.
pub const STAT_MAX: u16 = 255;

/// One base stat (hp, attack, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatEntry {
    pub name: String,
    pub value: u16,
}

impl StatEntry {
    pub fn new(name: impl Into<String>, value: u16) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Fraction of [`STAT_MAX`] this stat fills, in `0.0..=1.0`
    pub fn fill_ratio(&self) -> f64 {
        f64::from(self.value.min(STAT_MAX)) / f64::from(STAT_MAX)
    }
}
