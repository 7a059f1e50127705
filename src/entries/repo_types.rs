use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// A logged meal. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FoodLogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub calories: i32,
    #[serde(with = "crate::dates::iso_date")]
    pub log_date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Fully resolved entry ready for insertion; defaults are applied before
/// this is built.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: Uuid,
    pub calories: i32,
    pub log_date: Date,
    pub created_at: OffsetDateTime,
}
