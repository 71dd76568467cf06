use serde::{Deserialize, Serialize};

use super::{NamedResource, require_url};
use crate::ParseError;

/// `/pokemon/{id}` response, reduced to the fields the pokedex reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,

    /// Decimeters
    #[serde(default)]
    pub height: u32,

    /// Hectograms
    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub types: Vec<TypeSlot>,

    #[serde(default)]
    pub stats: Vec<StatSlot>,

    #[serde(default)]
    pub moves: Vec<MoveSlot>,

    #[serde(default)]
    pub sprites: Sprites,

    pub species: NamedResource,
}

impl PokemonRecord {
    /// URL of the species resource this pokemon belongs to
    pub fn species_url(&self) -> Result<&str, ParseError> {
        require_url(&self.species.url, "species.url")
    }

    /// Front-facing official artwork, if the API has one
    pub fn official_artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u16,
    #[serde(default)]
    pub effort: u8,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupDetail {
    /// 0 for moves not learned by level-up (machines, eggs, tutors)
    #[serde(default)]
    pub level_learned_at: u32,
    pub move_learn_method: Option<NamedResource>,
    pub version_group: Option<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}
