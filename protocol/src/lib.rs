use thiserror::Error;

pub mod endpoint;
pub mod resource;

pub use endpoint::{DEFAULT_BASE_URL, Endpoint};
pub use resource::{
    ApiResource, ChainLink, EvolutionChainRecord, EvolutionDetail, MoveSlot, NamedResource,
    PokemonRecord, SpeciesRecord, parse_evolution_chain, parse_pokemon, parse_species,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty response body")]
    EmptyBody,
}
