//! Domain records produced from decoded responses.

use std::collections::BTreeMap;

use super::responses::PokemonResponse;

/// Stat names in the order PokeAPI lists them.
pub const STAT_ORDER: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// A pokemon's detail record with stats and types flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetails {
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    /// Stat name to base value
    pub stats: BTreeMap<String, u32>,
    /// Type names in slot order
    pub types: Vec<String>,
}

impl PokemonDetails {
    /// Base value of the stat called `name`, if the record has it.
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.get(name).copied()
    }

    /// The six standard stats in display order, 0 for any the record lacks.
    pub fn standard_stats(&self) -> [(&'static str, u32); 6] {
        STAT_ORDER.map(|name| (name, self.stat(name).unwrap_or(0)))
    }
}

impl From<PokemonResponse> for PokemonDetails {
    fn from(response: PokemonResponse) -> Self {
        Self {
            name: response.name,
            base_experience: response.base_experience.unwrap_or_default(),
            height: response.height,
            weight: response.weight,
            stats: response
                .stats
                .into_iter()
                .map(|s| (s.stat.name, s.base_stat))
                .collect(),
            types: response.types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}

/// One page of location areas plus whether more pages exist either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaPage {
    /// Area names in server order
    pub areas: Vec<String>,
    pub has_next: bool,
    pub has_previous: bool,
}
