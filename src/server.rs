use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State as AxumState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::{
    error::{GameError, StoreError},
    game::{Action, GameState},
    store::GameStore,
};

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub action: Action,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    InvalidState(GameError),
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Game(err @ GameError::InvalidState { .. }) => ApiError::InvalidState(err),
            StoreError::Game(err @ GameError::UnknownAction(_)) => {
                ApiError::Validation(err.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InvalidState(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal(message) => {
                error!(%message, "game action failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub fn router(store: Arc<GameStore>) -> Router {
    Router::new()
        .route("/game-state", get(game_state))
        .route("/game-action", post(game_action))
        .route("/healthz", get(healthz))
        .with_state(store)
}

async fn game_state(
    AxumState(store): AxumState<Arc<GameStore>>,
) -> Result<Json<GameState>, ApiError> {
    Ok(Json(store.get()?))
}

async fn game_action(
    AxumState(store): AxumState<Arc<GameStore>>,
    payload: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<GameState>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "malformed game action");
        ApiError::Validation(format!("invalid action: {}", rejection.body_text()))
    })?;
    Ok(Json(store.apply(request.action)?))
}

async fn healthz() -> &'static str {
    "ok"
}
