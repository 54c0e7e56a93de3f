//! The roster / battle-history backend.
//!
//! A small axum service exposing:
//! - `GET|POST /team`, `DELETE /team/:id`
//! - `GET|POST /battles`, `DELETE /battles/:id`
//! - `GET /health`

pub mod handlers;
pub mod middleware;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::utils::error::{ArenaError, Result};
pub use store::{JsonStore, DEFAULT_DB_FILE};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
}

impl AppState {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl ArenaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ArenaError::NotFound { .. } => StatusCode::NOT_FOUND,
            ArenaError::RosterFull { .. }
            | ArenaError::DuplicateEntry { .. }
            | ArenaError::Conflict { .. } => StatusCode::CONFLICT,
            ArenaError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ArenaError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router(state: AppState, allow_any_origin: bool) -> Router {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/team",
            get(handlers::list_team).post(handlers::add_team_entry),
        )
        .route("/team/:id", delete(handlers::remove_team_entry))
        .route(
            "/battles",
            get(handlers::list_battles).post(handlers::add_battle),
        )
        .route("/battles/:id", delete(handlers::remove_battle))
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::timing_layer));

    if allow_any_origin {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

/// Serves `app` until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Arena backend listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{MemoryStorage, StorageBackend};
    use crate::domain::model::{BattleRecord, RosterEntry};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let storage = StorageBackend::Memory(MemoryStorage::new());
        let store = JsonStore::open(storage, DEFAULT_DB_FILE).await.unwrap();
        router(AppState::new(store), true)
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    /// Helper to extract response body as JSON
    async fn extract_json<T: serde::de::DeserializeOwned>(response: Response) -> (StatusCode, T) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: T = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = test_app().await;
        let response = app
            .oneshot(empty_request(Method::GET, "/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = || {
            Request::builder()
                .method(Method::GET)
                .uri("/team")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap()
        };

        let response = test_app().await.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&header::HeaderValue::from_static("*"))
        );

        let storage = StorageBackend::Memory(MemoryStorage::new());
        let store = JsonStore::open(storage, DEFAULT_DB_FILE).await.unwrap();
        let closed = router(AppState::new(store), false);
        let response = closed.oneshot(request()).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_team_crud() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/team",
                json!({"pokemonId": 25, "name": "pikachu", "timestamp": "2024-05-01T10:00:00.000Z"}),
            ))
            .await
            .unwrap();
        let (status, created): (_, RosterEntry) = extract_json(response).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.id, 1);

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/team"))
            .await
            .unwrap();
        let (status, team): (_, Vec<RosterEntry>) = extract_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(team.len(), 1);
        assert_eq!(team[0].pokemon_id, 25);

        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, "/team/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request(Method::DELETE, "/team/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_and_full_roster_conflict() {
        let app = test_app().await;

        for id in 1..=6 {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/team",
                    json!({"pokemonId": id, "name": format!("c{}", id)}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/team",
                json!({"pokemonId": 3, "name": "c3"}),
            ))
            .await
            .unwrap();
        let (status, body): (_, serde_json::Value) = extract_json(response).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("full"));

        app.clone()
            .oneshot(empty_request(Method::DELETE, "/team/6"))
            .await
            .unwrap();
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/team",
                json!({"pokemonId": 3, "name": "c3"}),
            ))
            .await
            .unwrap();
        let (status, body): (_, serde_json::Value) = extract_json(response).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("already"));
    }

    #[tokio::test]
    async fn test_battles_crud() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/battles",
                json!({
                    "pokemon1": "bulbasaur",
                    "pokemon2": "charmander",
                    "winner": "bulbasaur",
                    "timestamp": "2024-05-01T10:00:00Z",
                    "battleDetails": [
                        {"stat": "hp", "pokemon1Value": 45, "pokemon2Value": 39, "winner": "bulbasaur"}
                    ]
                }),
            ))
            .await
            .unwrap();
        let (status, stored): (_, BattleRecord) = extract_json(response).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(stored.battle_details.as_ref().unwrap()[0].pokemon1_value, 45);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/battles",
                json!({"pokemon1": "a", "pokemon2": "b", "winner": "nobody"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/battles"))
            .await
            .unwrap();
        let (_, battles): (_, Vec<BattleRecord>) = extract_json(response).await;
        assert_eq!(battles.len(), 1);

        let response = app
            .oneshot(empty_request(Method::DELETE, &format!("/battles/{}", stored.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
