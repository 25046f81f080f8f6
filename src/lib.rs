//! Pokedex - a REPL client for PokeAPI
//!
//! Pages through location areas, explores them and catches pokemon. Every
//! upstream response goes through an in-memory cache whose entries are
//! swept once per interval.

pub mod api;
pub mod cache;
pub mod catch;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::ExpiringCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
