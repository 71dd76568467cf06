//! Profile assembly from raw records

use pokedex_protocol::{EvolutionChainRecord, MoveSlot, PokemonRecord};

use super::evolution::flatten_chain;
use crate::types::{MoveEntry, PokemonProfile, StatEntry};

/// Build a profile from a pokemon record and its species' evolution chain
pub fn derive_profile(pokemon: &PokemonRecord, chain: &EvolutionChainRecord) -> PokemonProfile {
    let profile = PokemonProfile {
        id: pokemon.id,
        name: pokemon.name.clone(),
        types: pokemon
            .types
            .iter()
            .map(|slot| slot.kind.name.clone())
            .collect(),
        stats: pokemon
            .stats
            .iter()
            .map(|slot| StatEntry::new(slot.stat.name.clone(), slot.base_stat))
            .collect(),
        moves: derive_moves(&pokemon.moves),
        image_url: pokemon.official_artwork().map(str::to_string),
        height_m: f64::from(pokemon.height) / 10.0,
        weight_kg: f64::from(pokemon.weight) / 10.0,
        evolutions: flatten_chain(&chain.chain),
    };

    tracing::trace!(
        id = profile.id,
        name = %profile.name,
        moves = profile.moves.len(),
        evolutions = profile.evolutions.len(),
        "Derived profile"
    );

    profile
}

/// Map move slots to entries and sort them by level.
///
/// The level comes from the first version-group detail and defaults to 1.
/// The sort is stable: moves learned at the same level keep API order.
pub fn derive_moves(slots: &[MoveSlot]) -> Vec<MoveEntry> {
    let mut moves: Vec<MoveEntry> = slots
        .iter()
        .map(|slot| {
            let level = slot
                .version_group_details
                .first()
                .map(|detail| detail.level_learned_at)
                .unwrap_or(1);
            MoveEntry::new(slot.move_.name.clone(), level)
        })
        .collect();

    moves.sort_by_key(|m| m.level);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_protocol::{parse_evolution_chain, parse_pokemon};

    fn pokemon_json(moves: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": 2,
            "name": "ivysaur",
            "height": 10,
            "weight": 130,
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": ""}},
                {"slot": 2, "type": {"name": "poison", "url": ""}}
            ],
            "stats": [
                {"base_stat": 60, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 62, "effort": 0, "stat": {"name": "attack", "url": ""}},
                {"base_stat": 63, "effort": 0, "stat": {"name": "defense", "url": ""}}
            ],
            "moves": moves,
            "sprites": {"other": {"official-artwork": {"front_default": "https://img.test/2.png"}}},
            "species": {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/"}
        })
    }

    fn move_json(name: &str, levels: &[u32]) -> serde_json::Value {
        let details: Vec<_> = levels
            .iter()
            .map(|l| serde_json::json!({"level_learned_at": l, "move_learn_method": null, "version_group": null}))
            .collect();
        serde_json::json!({"move": {"name": name, "url": ""}, "version_group_details": details})
    }

    fn chain() -> EvolutionChainRecord {
        parse_evolution_chain(
            &serde_json::json!({
                "id": 1,
                "chain": {
                    "species": {"name": "bulbasaur", "url": ""},
                    "evolution_details": [],
                    "evolves_to": [{
                        "species": {"name": "ivysaur", "url": ""},
                        "evolution_details": [{"min_level": 16, "trigger": null}],
                        "evolves_to": [{
                            "species": {"name": "venusaur", "url": ""},
                            "evolution_details": [{"min_level": 32, "trigger": null}],
                            "evolves_to": []
                        }]
                    }]
                }
            })
            .to_string(),
        )
        .unwrap()
    }

    fn record(moves: serde_json::Value) -> PokemonRecord {
        parse_pokemon(&pokemon_json(moves).to_string()).unwrap()
    }

    #[test]
    fn test_identity_and_measurements() {
        let profile = derive_profile(&record(serde_json::json!([])), &chain());

        assert_eq!(profile.id, 2);
        assert_eq!(profile.name, "ivysaur");
        assert_eq!(profile.height_m, 1.0);
        assert_eq!(profile.weight_kg, 13.0);
        assert_eq!(profile.image_url.as_deref(), Some("https://img.test/2.png"));
    }

    #[test]
    fn test_measurements_are_tenths() {
        let mut pokemon = record(serde_json::json!([]));
        pokemon.height = 7;
        pokemon.weight = 69;
        let profile = derive_profile(&pokemon, &chain());

        assert_eq!(profile.height_m, 7.0 / 10.0);
        assert_eq!(profile.weight_kg, 69.0 / 10.0);
    }

    #[test]
    fn test_types_and_stats_keep_api_order() {
        let profile = derive_profile(&record(serde_json::json!([])), &chain());

        assert_eq!(profile.types, vec!["grass", "poison"]);
        let stat_names: Vec<_> = profile.stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stat_names, vec!["hp", "attack", "defense"]);
        assert_eq!(profile.stats[2].value, 63);
    }

    #[test]
    fn test_evolutions_start_at_base_form() {
        let profile = derive_profile(&record(serde_json::json!([])), &chain());

        assert_eq!(profile.evolutions[0].name, "bulbasaur");
        assert_eq!(profile.evolutions[0].min_level, None);
        assert_eq!(profile.evolutions[1].min_level, Some(16));
        assert_eq!(profile.evolutions[2].name, "venusaur");
    }

    #[test]
    fn test_moves_sorted_stably() {
        let profile = derive_profile(
            &record(serde_json::json!([
                move_json("razor-leaf", &[20]),
                move_json("tackle", &[1]),
                move_json("vine-whip", &[9]),
                move_json("growl", &[1]),
                move_json("leech-seed", &[9]),
            ])),
            &chain(),
        );

        let names: Vec<_> = profile.moves.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["tackle", "growl", "vine-whip", "leech-seed", "razor-leaf"]
        );
        assert!(profile.moves.windows(2).all(|w| w[0].level <= w[1].level));
    }

    #[test]
    fn test_move_level_defaults_to_one() {
        let moves = derive_moves(
            &record(serde_json::json!([
                move_json("solar-beam", &[0]),
                move_json("cut", &[]),
                move_json("sleep-powder", &[30, 15]),
            ]))
            .moves,
        );

        assert_eq!(moves[0], MoveEntry::new("solar-beam", 1));
        assert_eq!(moves[1], MoveEntry::new("cut", 1));
        // first version-group detail wins
        assert_eq!(moves[2], MoveEntry::new("sleep-powder", 30));
    }

    #[test]
    fn test_missing_artwork() {
        let mut json = pokemon_json(serde_json::json!([]));
        json["sprites"] = serde_json::json!({"front_default": null, "other": {}});
        let pokemon = parse_pokemon(&json.to_string()).unwrap();

        assert_eq!(derive_profile(&pokemon, &chain()).image_url, None);
    }
}
