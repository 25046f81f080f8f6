//! Resource decoders
//!
//! Pure functions turning a raw payload into the shape a caller needs.
//! They never touch the cache or the network.

use crate::error::Result;

use super::pokemon::PokemonDetails;
use super::responses::{LocationAreaDetail, LocationAreaList, PokemonResponse};

/// Decodes a listing page, cursors included.
pub fn decode_area_page(payload: &[u8]) -> Result<LocationAreaList> {
    Ok(serde_json::from_slice(payload)?)
}

/// Decodes an area body into the names of pokemon encountered there.
pub fn decode_encounters(payload: &[u8]) -> Result<Vec<String>> {
    let detail: LocationAreaDetail = serde_json::from_slice(payload)?;
    Ok(detail
        .pokemon_encounters
        .into_iter()
        .map(|encounter| encounter.pokemon.name)
        .collect())
}

/// Decodes a pokemon body into a flattened detail record.
pub fn decode_pokemon(payload: &[u8]) -> Result<PokemonDetails> {
    let response: PokemonResponse = serde_json::from_slice(payload)?;
    Ok(response.into())
}
