//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The request never produced a response (host unreachable, reset, timeout)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Failed to fetch data from PokeAPI: {status} for {url}")]
    Upstream { url: String, status: StatusCode },

    /// Pokemon detail lookup answered "not found"
    #[error("Pokemon not found: {0}")]
    PokemonNotFound(String),

    /// Payload did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Command invoked without a required argument
    #[error("Please provide a {0}")]
    MissingArgument(&'static str),

    /// Command name not present in the command table
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Inspect on a pokemon that is not in the registry
    #[error("You have not caught {0}")]
    NotCaught(String),

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns true if the upstream reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        match self {
            PokedexError::PokemonNotFound(_) => true,
            PokedexError::Upstream { status, .. } => *status == StatusCode::NOT_FOUND,
            _ => false,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
