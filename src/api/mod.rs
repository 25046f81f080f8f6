//! API Module
//!
//! Client side of the PokeAPI catalog.
//!
//! # Resources
//! - `GET /location-area/` - Paginated listing of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - Detail record for one pokemon

pub mod client;
pub mod cursor;
pub mod fetcher;

pub use client::PokeApiClient;
pub use cursor::PaginationCursor;
pub use fetcher::{CachedFetcher, Origin, Resolved};
