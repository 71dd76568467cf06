use serde::{Deserialize, Serialize};

use super::NamedResource;

/// `/evolution-chain/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainRecord {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,

    /// Conditions for evolving into this node; empty for the base form
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,

    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub min_level: Option<u32>,
    pub trigger: Option<NamedResource>,
}
