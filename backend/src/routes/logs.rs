//! Log entry API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::LogService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use fitness_coach_shared::{
    HydrationEntry, LogHydrationRequest, LogNutritionRequest, LogPainFatigueRequest,
    LogWorkoutRequest, NutritionEntry, PainFatigueEntry, ScheduleEventRequest, ScheduledEvent,
    WorkoutEntry,
};

/// Create log routes
pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", post(log_workout))
        .route("/nutrition", post(log_nutrition))
        .route("/hydration", post(log_hydration))
        .route("/pain-fatigue", post(log_pain_fatigue))
        .route("/schedule", post(schedule_event))
}

/// POST /api/v1/logs/workouts
async fn log_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogWorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutEntry>), ApiError> {
    let entry = LogService::log_workout(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/v1/logs/nutrition
async fn log_nutrition(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogNutritionRequest>,
) -> Result<(StatusCode, Json<NutritionEntry>), ApiError> {
    let entry = LogService::log_nutrition(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/v1/logs/hydration
async fn log_hydration(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogHydrationRequest>,
) -> Result<(StatusCode, Json<HydrationEntry>), ApiError> {
    let entry = LogService::log_hydration(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/v1/logs/pain-fatigue - Energy level or pain reading
async fn log_pain_fatigue(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogPainFatigueRequest>,
) -> Result<(StatusCode, Json<PainFatigueEntry>), ApiError> {
    let entry = LogService::log_pain_fatigue(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/v1/logs/schedule
async fn schedule_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ScheduleEventRequest>,
) -> Result<(StatusCode, Json<ScheduledEvent>), ApiError> {
    let event = LogService::schedule_event(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(event)))
}
