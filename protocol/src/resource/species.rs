use serde::{Deserialize, Serialize};

use super::{ApiResource, require_url};
use crate::ParseError;

/// `/pokemon-species/{id}` response, reduced to the link the pokedex follows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    pub evolution_chain: Option<ApiResource>,
}

impl SpeciesRecord {
    /// URL of the evolution chain this species is part of
    pub fn evolution_chain_url(&self) -> Result<&str, ParseError> {
        let link = self
            .evolution_chain
            .as_ref()
            .ok_or_else(|| ParseError::MissingField("evolution_chain".to_string()))?;
        require_url(&link.url, "evolution_chain.url")
    }
}
