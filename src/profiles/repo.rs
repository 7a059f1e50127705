use anyhow::Context;
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::PgStore;
use crate::profiles::repo_types::UserProfile;

#[async_trait]
pub trait ProfileRepo: Send + Sync {
    /// Insert a new profile; `now` becomes both timestamps.
    async fn insert(&self, target: i32, now: OffsetDateTime) -> anyhow::Result<UserProfile>;

    /// Replace the target. `None` when no profile has this id.
    async fn update_target(
        &self,
        id: Uuid,
        target: i32,
        now: OffsetDateTime,
    ) -> anyhow::Result<Option<UserProfile>>;

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<UserProfile>>;
}

#[async_trait]
impl ProfileRepo for PgStore {
    async fn insert(&self, target: i32, now: OffsetDateTime) -> anyhow::Result<UserProfile> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO user_profiles (id, daily_calorie_target, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id, daily_calorie_target, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(target)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("insert user profile")?;
        Ok(profile)
    }

    async fn update_target(
        &self,
        id: Uuid,
        target: i32,
        now: OffsetDateTime,
    ) -> anyhow::Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            UPDATE user_profiles
               SET daily_calorie_target = $2,
                   updated_at = $3
             WHERE id = $1
            RETURNING id, daily_calorie_target, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(target)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .context("update user profile")?;
        Ok(profile)
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, daily_calorie_target, created_at, updated_at
              FROM user_profiles
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("find user profile")?;
        Ok(profile)
    }
}
