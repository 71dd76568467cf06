#![allow(dead_code)]

use pokedex_client::mock::MockSource;
use pokedex_client::{ClientConfig, Pokedex, StalePolicy};

pub const BASE: &str = "https://pokeapi.co/api/v2";

pub const POKEMON_IVYSAUR: &str = include_str!("../fixtures/pokemon_ivysaur.json");
pub const SPECIES_IVYSAUR: &str = include_str!("../fixtures/species_ivysaur.json");
pub const CHAIN_1: &str = include_str!("../fixtures/evolution_chain_1.json");
pub const POKEMON_EEVEE: &str = include_str!("../fixtures/pokemon_eevee.json");
pub const SPECIES_EEVEE: &str = include_str!("../fixtures/species_eevee.json");
pub const CHAIN_67: &str = include_str!("../fixtures/evolution_chain_67.json");

pub const IVYSAUR_URL: &str = "https://pokeapi.co/api/v2/pokemon/ivysaur";
pub const IVYSAUR_BY_ID_URL: &str = "https://pokeapi.co/api/v2/pokemon/2";
pub const EEVEE_URL: &str = "https://pokeapi.co/api/v2/pokemon/eevee";
pub const SPECIES_2_URL: &str = "https://pokeapi.co/api/v2/pokemon-species/2/";
pub const SPECIES_133_URL: &str = "https://pokeapi.co/api/v2/pokemon-species/133/";
pub const CHAIN_1_URL: &str = "https://pokeapi.co/api/v2/evolution-chain/1/";
pub const CHAIN_67_URL: &str = "https://pokeapi.co/api/v2/evolution-chain/67/";

/// Mock API serving ivysaur (by name and id) and eevee
pub fn mock_api() -> MockSource {
    MockSource::new()
        .with_body(IVYSAUR_URL, POKEMON_IVYSAUR)
        .with_body(IVYSAUR_BY_ID_URL, POKEMON_IVYSAUR)
        .with_body(SPECIES_2_URL, SPECIES_IVYSAUR)
        .with_body(CHAIN_1_URL, CHAIN_1)
        .with_body(EEVEE_URL, POKEMON_EEVEE)
        .with_body(SPECIES_133_URL, SPECIES_EEVEE)
        .with_body(CHAIN_67_URL, CHAIN_67)
}

pub fn pokedex(source: MockSource) -> Pokedex<MockSource> {
    pokedex_with_policy(source, StalePolicy::LastToSettle)
}

pub fn pokedex_with_policy(source: MockSource, policy: StalePolicy) -> Pokedex<MockSource> {
    let config = ClientConfig {
        base_url: BASE.to_string(),
        stale_policy: policy,
        ..ClientConfig::default()
    };
    Pokedex::with_source(source, &config).expect("valid config")
}
