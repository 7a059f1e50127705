use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::entries::repo_types::FoodLogEntry;

/// Query string of `GET /summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub user_id: Uuid,
    #[serde(default, deserialize_with = "crate::dates::optional_date")]
    pub log_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    #[serde(with = "crate::dates::iso_date")]
    pub log_date: Date,
    pub total_calories: i64,
    pub daily_target: i32,
    /// Negative once the target is exceeded.
    pub remaining_calories: i64,
    pub entries: Vec<FoodLogEntry>,
}
