//! HTTP routes.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tavern_domain::{CharacterId, GameId, RuleSystem, SheetView};

use crate::app::App;
use crate::use_cases::character_sheet::{CharacterSheetError, EditOutcome};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route(
            "/api/characters/{id}/sheet",
            get(get_sheet).post(edit_sheet),
        )
        .route(
            "/api/games/{game_id}/characters/{id}/sheet",
            get(get_game_sheet).post(edit_game_sheet),
        )
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct SheetQuery {
    /// Numeric rule-system id; Pathfinder 1e when omitted.
    system: Option<i64>,
}

impl SheetQuery {
    fn rule_system(&self) -> Result<RuleSystem, ApiError> {
        let id = self
            .system
            .unwrap_or_else(|| RuleSystem::Pathfinder1.system_id());
        RuleSystem::from_system_id(id).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

async fn get_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Query(query): Query<SheetQuery>,
) -> Result<Json<SheetView>, ApiError> {
    let system = query.rule_system()?;
    let sheet = app
        .use_cases
        .character_sheet
        .compute_sheet(system, CharacterId::new(id))
        .await?;
    Ok(Json(sheet))
}

async fn edit_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Query(query): Query<SheetQuery>,
    Json(fields): Json<HashMap<String, String>>,
) -> Result<Json<EditOutcome>, ApiError> {
    let system = query.rule_system()?;
    let outcome = app
        .use_cases
        .character_sheet
        .apply_edit(system, CharacterId::new(id), &fields)
        .await;
    Ok(Json(outcome))
}

async fn get_game_sheet(
    State(app): State<Arc<App>>,
    Path((game_id, id)): Path<(i64, i64)>,
) -> Result<Json<SheetView>, ApiError> {
    let sheet = app
        .use_cases
        .character_sheet
        .compute_sheet_for_game(GameId::new(game_id), CharacterId::new(id))
        .await?;
    Ok(Json(sheet))
}

async fn edit_game_sheet(
    State(app): State<Arc<App>>,
    Path((game_id, id)): Path<(i64, i64)>,
    Json(fields): Json<HashMap<String, String>>,
) -> Json<EditOutcome> {
    let outcome = app
        .use_cases
        .character_sheet
        .apply_edit_for_game(GameId::new(game_id), CharacterId::new(id), &fields)
        .await;
    Json(outcome)
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<CharacterSheetError> for ApiError {
    fn from(e: CharacterSheetError) -> Self {
        match e {
            CharacterSheetError::CharacterNotFound(_) | CharacterSheetError::GameNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            CharacterSheetError::UnsupportedSystem(_) => ApiError::BadRequest(e.to_string()),
            CharacterSheetError::Bootstrap(_) | CharacterSheetError::Persistence(_) => {
                tracing::error!(error = %e, "Character sheet request failed");
                ApiError::Internal(e.to_string())
            }
        }
    }
}
