//! In-process PokeAPI stand-in for integration tests.
//!
//! Serves a six-area listing in pages of two, a few area bodies and a few
//! pokemon, and counts every request it answers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex::Config;
use serde_json::json;
use tokio::net::TcpListener;

pub const AREAS: [&str; 6] = [
    "canalave-city-area",
    "eterna-city-area",
    "pastoria-city-area",
    "sunyshore-city-area",
    "sinnoh-pokemon-league-area",
    "oreburgh-mine-1f",
];

pub const PAGE_SIZE: usize = 2;

#[derive(Clone)]
struct UpstreamState {
    base: String,
    requests: Arc<AtomicUsize>,
}

pub struct MockUpstream {
    base: String,
    requests: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(AtomicUsize::new(0));

        let state = UpstreamState {
            base: base.clone(),
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/api/v2/location-area/", get(list_areas))
            .route("/api/v2/location-area/:name", get(area_detail))
            .route("/api/v2/pokemon/:name", get(pokemon_detail))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base, requests }
    }

    pub fn api_url(&self) -> String {
        format!("{}/api/v2/", self.base)
    }

    pub fn config(&self) -> Config {
        Config::with_api_url(self.api_url())
    }

    /// Listing URL for the page starting at `offset`, as the server emits it.
    pub fn page_url(&self, offset: usize) -> String {
        page_url(&self.base, offset)
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

fn page_url(base: &str, offset: usize) -> String {
    format!("{base}/api/v2/location-area/?offset={offset}&limit={PAGE_SIZE}")
}

async fn list_areas(
    State(state): State<UpstreamState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let offset: usize = params
        .get("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let results: Vec<_> = AREAS
        .iter()
        .enumerate()
        .skip(offset)
        .take(PAGE_SIZE)
        .map(|(i, name)| {
            json!({
                "name": name,
                "url": format!("{}/api/v2/location-area/{}/", state.base, i + 1),
            })
        })
        .collect();

    let next = (offset + PAGE_SIZE < AREAS.len()).then(|| page_url(&state.base, offset + PAGE_SIZE));
    let previous = (offset > 0).then(|| page_url(&state.base, offset.saturating_sub(PAGE_SIZE)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn area_detail(State(state): State<UpstreamState>, Path(name): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let encounters: &[&str] = match name.as_str() {
        "pastoria-city-area" => &["tentacool", "tentacruel", "magikarp"],
        "empty-area" => &[],
        "broken-area" => return (StatusCode::OK, "invalid json").into_response(),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    let body: Vec<_> = encounters
        .iter()
        .map(|pokemon| {
            json!({
                "pokemon": {"name": pokemon, "url": format!("{}/api/v2/pokemon/{}/", state.base, pokemon)},
                "version_details": [],
            })
        })
        .collect();
    Json(json!({ "pokemon_encounters": body })).into_response()
}

async fn pokemon_detail(State(state): State<UpstreamState>, Path(name): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    match name.as_str() {
        "pikachu" => Json(pokemon_body("pikachu", 112, 4, 60, &["electric"])).into_response(),
        "blissey" => Json(pokemon_body("blissey", 608, 15, 468, &["normal"])).into_response(),
        "teapot" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn pokemon_body(
    name: &str,
    base_experience: u32,
    height: u32,
    weight: u32,
    types: &[&str],
) -> serde_json::Value {
    let stats = [
        ("hp", 35),
        ("attack", 55),
        ("defense", 40),
        ("special-attack", 50),
        ("special-defense", 50),
        ("speed", 90),
    ];
    json!({
        "id": 25,
        "name": name,
        "base_experience": base_experience,
        "height": height,
        "weight": weight,
        "stats": stats
            .iter()
            .map(|(stat, value)| json!({"base_stat": value, "effort": 0, "stat": {"name": stat, "url": ""}}))
            .collect::<Vec<_>>(),
        "types": types
            .iter()
            .enumerate()
            .map(|(slot, kind)| json!({"slot": slot + 1, "type": {"name": kind, "url": ""}}))
            .collect::<Vec<_>>(),
    })
}
