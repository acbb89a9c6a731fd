use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use chess_bot_core::{ChosenMove, GameInfo};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub fen: String,
    /// Game seed; the same seed and position always get the same reply
    #[serde(default)]
    pub seed: Option<String>,
}

pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Chess Bot API is running!",
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub async fn new_game() -> Json<GameInfo> {
    Json(chess_bot_core::new_game())
}

pub async fn next_move(
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<ChosenMove>, ApiError> {
    let Json(req) = payload?;

    let chosen = chess_bot_core::select_move(&req.fen, req.seed.as_deref()).map_err(|e| {
        if let chess_bot_core::Error::GameOver(status) = &e {
            debug!(fen = %req.fen, status = status.as_str(), "Position is terminal");
        }
        e
    })?;
    debug!(fen = %req.fen, uci = %chosen.uci, san = %chosen.san, "Chose move");

    Ok(Json(chosen))
}
