//! Evolution chain flattening

use pokedex_protocol::ChainLink;

use crate::types::EvolutionStep;

/// Flatten an evolution tree into a linear chain, base form first.
///
/// Only the first successor is followed at each node, so branching families
/// (Eevee, Tyrogue, ...) are truncated to a single path.
pub fn flatten_chain(root: &ChainLink) -> Vec<EvolutionStep> {
    let mut steps = Vec::new();
    let mut current = Some(root);

    while let Some(link) = current {
        let min_level = link
            .evolution_details
            .first()
            .and_then(|detail| detail.min_level);
        steps.push(EvolutionStep::new(link.species.name.clone(), min_level));
        current = link.evolves_to.first();
    }

    steps
}
