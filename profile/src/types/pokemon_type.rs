//! Pokemon elemental types and their display colors

use super::color::Rgb;

/// Color used for type names the palette does not know
pub const FALLBACK_COLOR: Rgb = Rgb::new(0x77, 0x77, 0x77);

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Parse from an API type name (case-insensitive)
    pub fn from_api_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// Badge color for this type
    pub fn color(&self) -> Rgb {
        TYPE_COLORS[*self as usize]
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Badge color for a type name as returned by the API.
///
/// Unknown names get [`FALLBACK_COLOR`].
pub fn type_color(name: &str) -> Rgb {
    Type::from_api_name(name)
        .map(|t| t.color())
        .unwrap_or(FALLBACK_COLOR)
}

/// Indexed by `Type as usize`
#[rustfmt::skip]
static TYPE_COLORS: [Rgb; 18] = [
    Rgb::new(0xA8, 0xA8, 0x78), // Normal
    Rgb::new(0xF0, 0x80, 0x30), // Fire
    Rgb::new(0x68, 0x90, 0xF0), // Water
    Rgb::new(0xF8, 0xD0, 0x30), // Electric
    Rgb::new(0x78, 0xC8, 0x50), // Grass
    Rgb::new(0x98, 0xD8, 0xD8), // Ice
    Rgb::new(0xC0, 0x30, 0x28), // Fighting
    Rgb::new(0xA0, 0x40, 0xA0), // Poison
    Rgb::new(0xE0, 0xC0, 0x68), // Ground
    Rgb::new(0xA8, 0x90, 0xF0), // Flying
    Rgb::new(0xF8, 0x58, 0x88), // Psychic
    Rgb::new(0xA8, 0xB8, 0x20), // Bug
    Rgb::new(0xB8, 0xA0, 0x38), // Rock
    Rgb::new(0x70, 0x58, 0x98), // Ghost
    Rgb::new(0x70, 0x38, 0xF8), // Dragon
    Rgb::new(0x70, 0x58, 0x48), // Dark
    Rgb::new(0xB8, 0xB8, 0xD0), // Steel
    Rgb::new(0xEE, 0x99, 0xAC), // Fairy
];
