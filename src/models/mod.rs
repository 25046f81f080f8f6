//! Data models for the Pokedex client
//!
//! Wire DTOs for the PokeAPI resources, the decoders that read them, and
//! the domain records handed to the rest of the program.

pub mod decode;
pub mod pokemon;
pub mod responses;

// Re-export commonly used types
pub use decode::{decode_area_page, decode_encounters, decode_pokemon};
pub use pokemon::{AreaPage, PokemonDetails, STAT_ORDER};
pub use responses::{
    LocationAreaDetail, LocationAreaList, NamedResource, PokemonEncounter, PokemonResponse,
    PokemonStat, PokemonType, StatName, TypeName,
};
