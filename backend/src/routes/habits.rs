//! Habit API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::HabitService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use fitness_coach_shared::{CreateHabitRequest, Habit, HabitCompletion, LogHabitCompletionRequest};
use uuid::Uuid;

/// Create habit routes
pub fn habit_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_habit))
        .route("/:id/completions", post(log_completion))
}

/// POST /api/v1/habits
async fn create_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<Habit>), ApiError> {
    let habit = HabitService::create_habit(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(habit)))
}

/// POST /api/v1/habits/:id/completions - Mark a day done or not done
///
/// A second entry for the same day replaces the first.
async fn log_completion(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(habit_id): Path<Uuid>,
    Json(req): Json<LogHabitCompletionRequest>,
) -> Result<Json<HabitCompletion>, ApiError> {
    let completion = HabitService::log_completion(state.db(), auth.user_id, habit_id, req).await?;
    Ok(Json(completion))
}
