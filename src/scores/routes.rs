//! Score leaderboard REST API routes

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use super::database::{ScoreDatabase, LEADERBOARD_LIMIT};
use super::models::NewScore;

/// Shared score service state
pub struct ScoresState {
    pub db: ScoreDatabase,
}

/// Create the `/api/scores` router
pub fn scores_router(state: Arc<ScoresState>) -> Router {
    Router::new()
        .route("/", get(get_scores))
        .route("/", post(post_score))
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

fn error_response(status: StatusCode, message: &str) -> impl IntoResponse {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

/// GET /api/scores - top 10, fewest moves first, time as tie-break
async fn get_scores(State(state): State<Arc<ScoresState>>) -> impl IntoResponse {
    match state.db.top_scores(LEADERBOARD_LIMIT) {
        Ok(scores) => Json(scores).into_response(),
        Err(e) => {
            log::error!("Failed to load leaderboard: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()).into_response()
        }
    }
}

/// POST /api/scores - persist one finished session's score
async fn post_score(
    State(state): State<Arc<ScoresState>>,
    Json(req): Json<NewScore>,
) -> impl IntoResponse {
    let (player_name, moves, time, puzzle_type) = match req.validate() {
        Ok(fields) => fields,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message).into_response(),
    };

    match state.db.insert_score(&player_name, moves, time, &puzzle_type) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => {
            log::error!("Failed to store score: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()).into_response()
        }
    }
}
