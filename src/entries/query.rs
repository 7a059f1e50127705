use std::cmp::Ordering;

use time::Date;
use uuid::Uuid;

use crate::entries::repo_types::FoodLogEntry;

/// Selects one user's entries, optionally bounded by an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryQuery {
    pub user_id: Uuid,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl EntryQuery {
    pub fn between(user_id: Uuid, start_date: Option<Date>, end_date: Option<Date>) -> Self {
        Self {
            user_id,
            start_date,
            end_date,
        }
    }

    /// Exactly one calendar day.
    pub fn on_date(user_id: Uuid, date: Date) -> Self {
        Self::between(user_id, Some(date), Some(date))
    }

    pub fn matches(&self, entry: &FoodLogEntry) -> bool {
        entry.user_id == self.user_id
            && self.start_date.map_or(true, |start| entry.log_date >= start)
            && self.end_date.map_or(true, |end| entry.log_date <= end)
    }
}

/// Listing order: latest `log_date` first, then latest `created_at`.
pub fn newest_first(a: &FoodLogEntry, b: &FoodLogEntry) -> Ordering {
    b.log_date
        .cmp(&a.log_date)
        .then_with(|| b.created_at.cmp(&a.created_at))
}
