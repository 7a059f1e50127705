use anyhow::Context;
use time::{macros::format_description, UtcOffset};

/// Where profiles and food log entries are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// Offset used to decide which calendar day "today" is.
    pub utc_offset: UtcOffset,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("APP_PORT") {
            Some(v) => v.parse::<u16>().context("APP_PORT must be a port number")?,
            None => 8080,
        };

        let storage = match lookup("STORAGE_BACKEND").as_deref() {
            None | Some("postgres") => StorageBackend::Postgres,
            Some("memory") => StorageBackend::Memory,
            Some(other) => anyhow::bail!("unknown STORAGE_BACKEND {other:?}"),
        };

        let database_url = lookup("DATABASE_URL");
        if storage == StorageBackend::Postgres && database_url.is_none() {
            anyhow::bail!("DATABASE_URL is required for the postgres backend");
        }

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("DB_MAX_CONNECTIONS {v:?} must be a positive integer"))?,
            None => 10,
        };

        let utc_offset = match lookup("APP_UTC_OFFSET") {
            Some(v) => parse_offset(&v)?,
            None => UtcOffset::UTC,
        };

        Ok(Self {
            host,
            port,
            storage,
            database_url,
            max_connections,
            utc_offset,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_offset(raw: &str) -> anyhow::Result<UtcOffset> {
    UtcOffset::parse(
        raw.trim(),
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .with_context(|| format!("APP_UTC_OFFSET {raw:?} is not a +HH:MM offset"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_database_url() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")]))
            .expect("config");
        assert_eq!(cfg.storage, StorageBackend::Postgres);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.max_connections, 10);
        assert_eq!(cfg.utc_offset, UtcOffset::UTC);
    }

    #[test]
    fn postgres_backend_requires_database_url() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("APP_PORT", "9000"),
            ("APP_UTC_OFFSET", "-05:30"),
        ]))
        .expect("config");
        assert_eq!(cfg.storage, StorageBackend::Memory);
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.utc_offset.whole_minutes(), -330);
    }

    #[test]
    fn explicit_pool_size_is_used() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("DB_MAX_CONNECTIONS", "25"),
        ]))
        .expect("config");
        assert_eq!(cfg.max_connections, 25);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AppConfig::from_lookup(lookup_from(&[("STORAGE_BACKEND", "sqlite")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("APP_UTC_OFFSET", "EST"),
        ]))
        .is_err());
        for pool in ["lots", "0", "-3"] {
            let err = AppConfig::from_lookup(lookup_from(&[
                ("STORAGE_BACKEND", "memory"),
                ("DB_MAX_CONNECTIONS", pool),
            ]))
            .unwrap_err();
            assert!(err.to_string().contains("DB_MAX_CONNECTIONS"), "{pool}");
        }
    }
}
