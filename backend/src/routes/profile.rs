//! Profile API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitness_coach_shared::{MacroTargets, Profile, UpsertProfileRequest, WorkoutPlan};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile).put(upsert_profile))
        .route("/targets", get(get_targets))
        .route("/workout-plan", get(get_workout_plan))
}

/// GET /api/v1/profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(ProfileService::get_profile(state.db(), auth.user_id).await?))
}

/// PUT /api/v1/profile - Create or replace the profile
async fn upsert_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    Ok(Json(
        ProfileService::upsert_profile(state.db(), auth.user_id, req).await?,
    ))
}

/// GET /api/v1/profile/targets - Calorie and macro targets
async fn get_targets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MacroTargets>, ApiError> {
    Ok(Json(ProfileService::targets(state.db(), auth.user_id).await?))
}

/// GET /api/v1/profile/workout-plan - Suggested session for the profile
async fn get_workout_plan(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<WorkoutPlan>, ApiError> {
    Ok(Json(
        ProfileService::workout_plan(state.db(), auth.user_id).await?,
    ))
}
