//! Shared Test Fixtures
//!
//! A local stand-in for PokeAPI, bound to an ephemeral port, serving a
//! small fixed world: two pages of location areas, one explorable area,
//! and a handful of pokemon. Every answered request is counted so tests
//! can tell cache hits from real fetches.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

// == Request Counter ==
/// Counts every request the mock server answers.
#[derive(Clone, Default)]
pub struct RequestCounter(Arc<AtomicUsize>);

impl RequestCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

// == Mock State ==
#[derive(Clone)]
struct MockState {
    requests: RequestCounter,
    base_url: String,
}

// == Mock PokeAPI ==
/// Handle to a running PokeAPI stand-in.
pub struct MockPokeApi {
    pub base_url: String,
    pub requests: RequestCounter,
}

/// Starts the mock server on an ephemeral local port.
pub async fn spawn_mock_api() -> MockPokeApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let requests = RequestCounter::default();
    let state = MockState {
        requests: requests.clone(),
        base_url: base_url.clone(),
    };

    let app = Router::new()
        .route("/location-area/", get(location_page))
        .route("/location-area/:name", get(location_area))
        .route("/pokemon/:name", get(pokemon))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockPokeApi { base_url, requests }
}

// == Handlers ==

/// Two pages of location areas, linked through `next` and `previous`.
async fn location_page(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    state.requests.bump();

    if params.get("offset").map(String::as_str) == Some("20") {
        Json(json!({
            "count": 3,
            "next": null,
            "previous": format!("{}/location-area/", state.base_url),
            "results": [
                {
                    "name": "eterna-forest-area",
                    "url": format!("{}/location-area/eterna-forest-area", state.base_url),
                },
            ],
        }))
    } else {
        Json(json!({
            "count": 3,
            "next": format!("{}/location-area/?offset=20", state.base_url),
            "previous": null,
            "results": [
                {
                    "name": "canalave-city-area",
                    "url": format!("{}/location-area/canalave-city-area", state.base_url),
                },
                {
                    "name": "pastoria-city-area",
                    "url": format!("{}/location-area/pastoria-city-area", state.base_url),
                },
            ],
        }))
    }
}

/// One explorable area with two encounters.
async fn location_area(State(state): State<MockState>, Path(name): Path<String>) -> Response {
    state.requests.bump();

    if name != "pastoria-city-area" {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    Json(json!({
        "name": "pastoria-city-area",
        "pokemon_encounters": [
            {
                "pokemon": {
                    "name": "tentacool",
                    "url": format!("{}/pokemon/tentacool", state.base_url),
                },
            },
            {
                "pokemon": {
                    "name": "magikarp",
                    "url": format!("{}/pokemon/magikarp", state.base_url),
                },
            },
        ],
    }))
    .into_response()
}

/// Pokemon data. `magikarp` has no base experience at all, so it can
/// always be caught, which keeps catch flows deterministic in tests.
/// It is also reachable by its id, the way the real API resolves both.
async fn pokemon(State(state): State<MockState>, Path(name): Path<String>) -> Response {
    state.requests.bump();

    let body = match name.as_str() {
        "magikarp" | "129" => json!({
            "name": "magikarp",
            "base_experience": null,
            "height": 9,
            "weight": 100,
            "stats": [
                {
                    "base_stat": 80,
                    "stat": { "name": "speed", "url": format!("{}/stat/6/", state.base_url) },
                },
            ],
            "types": [
                { "slot": 1, "type": { "name": "water", "url": format!("{}/type/11/", state.base_url) } },
            ],
        }),
        "tentacool" => json!({
            "name": "tentacool",
            "base_experience": 67,
            "height": 9,
            "weight": 455,
            "stats": [
                {
                    "base_stat": 40,
                    "stat": { "name": "hp", "url": format!("{}/stat/1/", state.base_url) },
                },
                {
                    "base_stat": 70,
                    "stat": { "name": "speed", "url": format!("{}/stat/6/", state.base_url) },
                },
            ],
            "types": [
                { "slot": 1, "type": { "name": "water", "url": format!("{}/type/11/", state.base_url) } },
                { "slot": 2, "type": { "name": "poison", "url": format!("{}/type/4/", state.base_url) } },
            ],
        }),
        _ => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
    };

    Json(body).into_response()
}
