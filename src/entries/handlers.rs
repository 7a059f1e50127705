use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{CreateEntryRequest, ListEntriesParams};
use super::query::EntryQuery;
use super::repo_types::FoodLogEntry;
use super::services;
use crate::error::AppError;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/entries", get(list_entries))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/entries", post(create_entry))
}

#[instrument(skip(state))]
pub async fn create_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<FoodLogEntry>), AppError> {
    let entry = services::create_entry(&state, body.user_id, body.calories, body.log_date).await?;
    info!(
        entry_id = %entry.id,
        user_id = %entry.user_id,
        calories = entry.calories,
        log_date = %entry.log_date,
        "food log entry created"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(p): Query<ListEntriesParams>,
) -> Result<Json<Vec<FoodLogEntry>>, AppError> {
    let query = EntryQuery::between(p.user_id, p.start_date, p.end_date);
    Ok(Json(services::list_entries(&state, query).await?))
}
