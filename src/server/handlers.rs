//! Roster and battle-history handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::model::{BattleRecord, NewBattleRecord, NewRosterEntry, RosterEntry};
use crate::server::AppState;
use crate::utils::error::ArenaError;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

/// `GET /team`: roster entries in insertion order.
pub async fn list_team(State(state): State<AppState>) -> Json<Vec<RosterEntry>> {
    Json(state.store.list_team().await)
}

/// `POST /team`
///
/// - `201 Created`: the stored entry with its assigned id
/// - `409 Conflict`: roster full or creature already present
/// - `422 Unprocessable Entity`: empty name
pub async fn add_team_entry(
    State(state): State<AppState>,
    Json(entry): Json<NewRosterEntry>,
) -> Result<(StatusCode, Json<RosterEntry>), ArenaError> {
    let stored = state.store.add_team_entry(entry).await?;
    tracing::info!("Roster entry {} added ({})", stored.id, stored.name);
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `DELETE /team/:id`: `204` on success, `404` for an unknown id.
pub async fn remove_team_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ArenaError> {
    state.store.remove_team_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /battles`: oldest first, clients reverse for display.
pub async fn list_battles(State(state): State<AppState>) -> Json<Vec<BattleRecord>> {
    Json(state.store.list_battles().await)
}

/// `POST /battles`
///
/// - `201 Created`: the stored record
/// - `422 Unprocessable Entity`: empty names or a winner that didn't fight
pub async fn add_battle(
    State(state): State<AppState>,
    Json(record): Json<NewBattleRecord>,
) -> Result<(StatusCode, Json<BattleRecord>), ArenaError> {
    let stored = state.store.add_battle(record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `DELETE /battles/:id`
pub async fn remove_battle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ArenaError> {
    state.store.remove_battle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
