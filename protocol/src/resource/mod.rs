mod evolution;
mod pokemon;
mod species;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ParseError;

pub use evolution::{ChainLink, EvolutionChainRecord, EvolutionDetail};
pub use pokemon::{
    ArtworkSprites, MoveSlot, OtherSprites, PokemonRecord, Sprites, StatSlot, TypeSlot,
    VersionGroupDetail,
};
pub use species::SpeciesRecord;

/// A `{name, url}` link to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare `{url}` link to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// Parse a `/pokemon/{id}` response body
pub fn parse_pokemon(body: &str) -> Result<PokemonRecord, ParseError> {
    parse_body(body)
}

/// Parse a `/pokemon-species/{id}` response body
pub fn parse_species(body: &str) -> Result<SpeciesRecord, ParseError> {
    parse_body(body)
}

/// Parse an `/evolution-chain/{id}` response body
pub fn parse_evolution_chain(body: &str) -> Result<EvolutionChainRecord, ParseError> {
    parse_body(body)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }

    Ok(serde_json::from_str(body)?)
}

/// Return the url of a link, or `MissingField(field)` when it is blank
pub(crate) fn require_url<'a>(url: &'a str, field: &str) -> Result<&'a str, ParseError> {
    if url.trim().is_empty() {
        return Err(ParseError::MissingField(field.to_string()));
    }
    Ok(url)
}
