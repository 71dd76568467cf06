use pokedex_profile::{PokemonProfile, derive_profile};
use pokedex_protocol::{
    Endpoint, ParseError, parse_evolution_chain, parse_pokemon, parse_species,
};
use reqwest::Url;

use crate::Pokedex;
use crate::error::{FetchStage, LookupError};
use crate::source::DexSource;

/// Trim and lowercase a user query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

impl<S: DexSource> Pokedex<S> {
    /// Look up a Pokemon by name or dex number and build its profile.
    ///
    /// Issues three sequential requests: the pokemon itself, then its
    /// species, then the species' evolution chain. Nothing is cached.
    pub async fn fetch_profile(&self, query: &str) -> Result<PokemonProfile, LookupError> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        // dot segments would be resolved away instead of looked up
        if query == "." || query == ".." {
            return Err(LookupError::InvalidQuery(query));
        }

        let pokemon_url = self.endpoint_url(&Endpoint::Pokemon(query))?;
        let body = self.fetch(FetchStage::Pokemon, pokemon_url.as_str()).await?;
        let pokemon = parse_pokemon(&body).map_err(malformed(FetchStage::Pokemon))?;

        let species_url = pokemon
            .species_url()
            .map_err(malformed(FetchStage::Pokemon))?;
        let body = self.fetch(FetchStage::Species, species_url).await?;
        let species = parse_species(&body).map_err(malformed(FetchStage::Species))?;

        let chain_url = species
            .evolution_chain_url()
            .map_err(malformed(FetchStage::Species))?;
        let body = self.fetch(FetchStage::EvolutionChain, chain_url).await?;
        let chain =
            parse_evolution_chain(&body).map_err(malformed(FetchStage::EvolutionChain))?;

        let profile = derive_profile(&pokemon, &chain);
        tracing::info!(id = profile.id, name = %profile.name, "Fetched profile");
        Ok(profile)
    }

    async fn fetch(&self, stage: FetchStage, url: &str) -> Result<String, LookupError> {
        tracing::debug!(stage = %stage, url = %url, "Fetching");
        self.source
            .get(url)
            .await
            .map_err(|e| LookupError::from_source(stage, e))
    }

    fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl {
                base: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }
}

fn malformed(stage: FetchStage) -> impl Fn(ParseError) -> LookupError {
    move |source| LookupError::Malformed { stage, source }
}
