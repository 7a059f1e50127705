use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use super::dto::{DailySummary, SummaryParams};
use super::services;
use crate::error::AppError;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/summary", get(get_daily_summary))
}

#[instrument(skip(state))]
pub async fn get_daily_summary(
    State(state): State<AppState>,
    Query(p): Query<SummaryParams>,
) -> Result<Json<DailySummary>, AppError> {
    let summary = services::daily_summary(&state, p.user_id, p.log_date).await?;
    debug!(
        user_id = %p.user_id,
        log_date = %summary.log_date,
        total = summary.total_calories,
        remaining = summary.remaining_calories,
        "daily summary computed"
    );
    Ok(Json(summary))
}
