use time::Date;
use uuid::Uuid;

use crate::entries::query::EntryQuery;
use crate::entries::repo_types::FoodLogEntry;
use crate::error::AppError;
use crate::state::AppState;
use crate::summary::dto::DailySummary;

/// Folds one day's entries against the target. Remaining is not clamped.
pub fn summarize(log_date: Date, daily_target: i32, entries: Vec<FoodLogEntry>) -> DailySummary {
    let total_calories: i64 = entries.iter().map(|e| i64::from(e.calories)).sum();
    DailySummary {
        log_date,
        total_calories,
        daily_target,
        remaining_calories: i64::from(daily_target) - total_calories,
        entries,
    }
}

pub async fn daily_summary(
    st: &AppState,
    user_id: Uuid,
    log_date: Option<Date>,
) -> Result<DailySummary, AppError> {
    let log_date = log_date.unwrap_or_else(|| st.clock.today());

    let profile = st
        .profiles
        .find(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user profile {user_id} not found")))?;

    let entries = st.entries.list(&EntryQuery::on_date(user_id, log_date)).await?;
    Ok(summarize(log_date, profile.daily_calorie_target, entries))
}
