use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::entries::query::{newest_first, EntryQuery};
use crate::entries::repo::EntryRepo;
use crate::entries::repo_types::{FoodLogEntry, NewEntry};
use crate::profiles::repo::ProfileRepo;
use crate::profiles::repo_types::UserProfile;

/// Process-local store for `STORAGE_BACKEND=memory` and for tests.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<Uuid, UserProfile>>,
    // insertion order
    entries: RwLock<Vec<FoodLogEntry>>,
}

#[async_trait]
impl ProfileRepo for MemoryStore {
    async fn insert(&self, target: i32, now: OffsetDateTime) -> anyhow::Result<UserProfile> {
        let profile = UserProfile {
            id: Uuid::new_v4(),
            daily_calorie_target: target,
            created_at: now,
            updated_at: now,
        };
        self.profiles
            .write()
            .await
            .insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn update_target(
        &self,
        id: Uuid,
        target: i32,
        now: OffsetDateTime,
    ) -> anyhow::Result<Option<UserProfile>> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles.get_mut(&id).map(|p| {
            p.daily_calorie_target = target;
            p.updated_at = now;
            p.clone()
        }))
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl EntryRepo for MemoryStore {
    async fn insert(&self, entry: NewEntry) -> anyhow::Result<FoodLogEntry> {
        let row = FoodLogEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            calories: entry.calories,
            log_date: entry.log_date,
            created_at: entry.created_at,
        };
        self.entries.write().await.push(row.clone());
        Ok(row)
    }

    async fn list(&self, query: &EntryQuery) -> anyhow::Result<Vec<FoodLogEntry>> {
        // Walk newest insertions first so the stable sort leaves full ties
        // in most-recent-first order.
        let mut rows: Vec<FoodLogEntry> = self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|e| query.matches(e))
            .cloned()
            .collect();
        rows.sort_by(newest_first);
        Ok(rows)
    }
}
