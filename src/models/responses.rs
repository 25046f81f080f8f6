//! Response DTOs for the PokeAPI resources
//!
//! Mirrors the JSON bodies returned by the upstream catalog. Field names are
//! part of the wire contract.

use serde::{Deserialize, Deserializer, Serialize};

/// A `{name, url}` reference as it appears throughout PokeAPI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response body for the paginated listing (GET /location-area/)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAreaList {
    #[serde(default)]
    pub count: u32,
    /// Cursor to the following page; `null` or empty on the last page
    #[serde(default, deserialize_with = "empty_as_none")]
    pub next: Option<String>,
    /// Cursor to the preceding page; `null` or empty on the first page
    #[serde(default, deserialize_with = "empty_as_none")]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Response body for a single area (GET /location-area/{name})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAreaDetail {
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Response body for a single pokemon (GET /pokemon/{name})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    /// Missing for some alternate forms upstream
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: StatName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: TypeName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeName {
    pub name: String,
}

/// Treats both `null` and `""` as an absent cursor.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_with_null_previous() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [{"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"}]
        }"#;
        let list: LocationAreaList = serde_json::from_str(json).unwrap();

        assert_eq!(list.count, 1089);
        assert_eq!(
            list.next.as_deref(),
            Some("https://pokeapi.co/api/v2/location-area/?offset=20&limit=20")
        );
        assert!(list.previous.is_none());
        assert_eq!(list.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_listing_with_empty_string_cursors() {
        let json = r#"{"count": 0, "next": "", "previous": "", "results": []}"#;
        let list: LocationAreaList = serde_json::from_str(json).unwrap();

        assert!(list.next.is_none());
        assert!(list.previous.is_none());
        assert!(list.results.is_empty());
    }

    #[test]
    fn test_listing_with_missing_cursors() {
        let json = r#"{"results": [{"name": "a"}]}"#;
        let list: LocationAreaList = serde_json::from_str(json).unwrap();

        assert!(list.next.is_none());
        assert!(list.previous.is_none());
        assert_eq!(list.results[0].url, "");
    }

    #[test]
    fn test_pokemon_type_field_name() {
        let json = r#"{"type": {"name": "electric"}}"#;
        let kind: PokemonType = serde_json::from_str(json).unwrap();
        assert_eq!(kind.kind.name, "electric");

        let back = serde_json::to_string(&kind).unwrap();
        assert!(back.contains("\"type\""));
    }

    #[test]
    fn test_pokemon_null_base_experience() {
        let json = r#"{"name": "x", "base_experience": null, "height": 1, "weight": 2, "stats": [], "types": []}"#;
        let pokemon: PokemonResponse = serde_json::from_str(json).unwrap();
        assert!(pokemon.base_experience.is_none());
    }
}
