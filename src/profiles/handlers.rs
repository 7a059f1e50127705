use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::ProfileTargetRequest;
use super::repo_types::UserProfile;
use super::services;
use crate::error::AppError;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/profiles/:id", get(get_profile))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", post(create_profile))
        .route("/profiles/:id", put(update_profile))
}

#[instrument(skip(state))]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(body): Json<ProfileTargetRequest>,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    let profile = services::create_profile(&state, body.daily_calorie_target).await?;
    info!(user_id = %profile.id, target = profile.daily_calorie_target, "profile created");
    Ok((StatusCode::CREATED, Json(profile)))
}

#[instrument(skip(state))]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ProfileTargetRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = services::update_profile(&state, id, body.daily_calorie_target).await?;
    info!(user_id = %profile.id, target = profile.daily_calorie_target, "profile updated");
    Ok(Json(profile))
}

/// Responds with `null` rather than 404 when the profile does not exist;
/// a client with no profile yet is an expected state.
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<UserProfile>>, AppError> {
    Ok(Json(services::get_profile(&state, id).await?))
}
