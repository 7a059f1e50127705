use anyhow::Context;
use async_trait::async_trait;
use uuid::Uuid;

use crate::db::PgStore;
use crate::entries::query::EntryQuery;
use crate::entries::repo_types::{FoodLogEntry, NewEntry};

#[async_trait]
pub trait EntryRepo: Send + Sync {
    async fn insert(&self, entry: NewEntry) -> anyhow::Result<FoodLogEntry>;

    /// Entries matching `query`, newest first (see `query::newest_first`).
    async fn list(&self, query: &EntryQuery) -> anyhow::Result<Vec<FoodLogEntry>>;
}

#[async_trait]
impl EntryRepo for PgStore {
    async fn insert(&self, entry: NewEntry) -> anyhow::Result<FoodLogEntry> {
        let row = sqlx::query_as::<_, FoodLogEntry>(
            r#"
            INSERT INTO food_log_entries (id, user_id, calories, log_date, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, calories, log_date, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.user_id)
        .bind(entry.calories)
        .bind(entry.log_date)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .context("insert food log entry")?;
        Ok(row)
    }

    async fn list(&self, query: &EntryQuery) -> anyhow::Result<Vec<FoodLogEntry>> {
        let rows = sqlx::query_as::<_, FoodLogEntry>(
            r#"
            SELECT id, user_id, calories, log_date, created_at
              FROM food_log_entries
             WHERE user_id = $1
               AND ($2::date IS NULL OR log_date >= $2)
               AND ($3::date IS NULL OR log_date <= $3)
             ORDER BY log_date DESC, created_at DESC
            "#,
        )
        .bind(query.user_id)
        .bind(query.start_date)
        .bind(query.end_date)
        .fetch_all(&self.pool)
        .await
        .context("list food log entries")?;
        Ok(rows)
    }
}
