use std::sync::Arc;

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::{AppConfig, StorageBackend};
use crate::db::PgStore;
use crate::entries::repo::EntryRepo;
use crate::memory::MemoryStore;
use crate::profiles::repo::ProfileRepo;

#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileRepo>,
    pub entries: Arc<dyn EntryRepo>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let clock = Arc::new(SystemClock::new(config.utc_offset));

        match config.storage {
            StorageBackend::Postgres => {
                let store = Arc::new(PgStore::connect(config).await?);
                store.migrate().await?;
                info!("using postgres storage");
                Ok(Self::from_parts(store.clone(), store, clock))
            }
            StorageBackend::Memory => {
                let store = Arc::new(MemoryStore::default());
                info!("using in-memory storage; data is lost on restart");
                Ok(Self::from_parts(store.clone(), store, clock))
            }
        }
    }

    pub fn from_parts(
        profiles: Arc<dyn ProfileRepo>,
        entries: Arc<dyn EntryRepo>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            profiles,
            entries,
            clock,
        }
    }

    /// Memory store with a clock pinned to 2024-01-15 09:00 UTC.
    #[cfg(test)]
    pub fn fake() -> Self {
        let clock = Arc::new(crate::clock::FixedClock::at(
            time::macros::datetime!(2024-01-15 09:00 UTC),
        ));
        Self::fake_with_clock(clock)
    }

    #[cfg(test)]
    pub fn fake_with_clock(clock: Arc<crate::clock::FixedClock>) -> Self {
        let store = Arc::new(MemoryStore::default());
        Self::from_parts(store.clone(), store, clock)
    }
}
