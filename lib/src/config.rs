// lib/src/config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use log::warn;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_DIR: &str = "./medtrack_data";
pub const DEFAULT_SESSION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageEngineKind {
    Sled,
    Memory,
}

impl FromStr for StorageEngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sled" => Ok(StorageEngineKind::Sled),
            "memory" | "in-memory" => Ok(StorageEngineKind::Memory),
            other => Err(format!("unknown storage engine '{}'", other)),
        }
    }
}

/// Process configuration, read once at startup from the environment
/// (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub storage_engine: StorageEngineKind,
    pub data_dir: PathBuf,
    /// Announcement topic for the notifier. Absent means notifications are
    /// skipped entirely.
    pub notification_topic: Option<String>,
    /// Hard session lifetime; sessions never refresh on activity.
    pub session_lifetime_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("default bind addr parses"),
            storage_engine: StorageEngineKind::Sled,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            notification_topic: None,
            session_lifetime_secs: DEFAULT_SESSION_LIFETIME_SECS,
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults on absent or malformed values (malformed values warn).
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            warn!(".env file not found, using environment and defaults");
        }

        let defaults = AppConfig::default();

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("invalid BIND_ADDR '{}', using {}", raw, defaults.bind_addr);
                defaults.bind_addr
            }),
            Err(_) => defaults.bind_addr,
        };

        let storage_engine = match env::var("STORAGE_ENGINE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e: String| {
                warn!("{}, using sled", e);
                StorageEngineKind::Sled
            }),
            Err(_) => StorageEngineKind::Sled,
        };

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let notification_topic = env::var("NOTIFICATION_TOPIC").ok().filter(|t| !t.is_empty());

        let session_lifetime_secs = match env::var("SESSION_LIFETIME_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    "invalid SESSION_LIFETIME_SECS '{}', using {}",
                    raw, defaults.session_lifetime_secs
                );
                defaults.session_lifetime_secs
            }),
            Err(_) => defaults.session_lifetime_secs,
        };

        AppConfig {
            bind_addr,
            storage_engine,
            data_dir,
            notification_topic,
            session_lifetime_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_kind_parses_both_spellings() {
        assert_eq!("sled".parse::<StorageEngineKind>().unwrap(), StorageEngineKind::Sled);
        assert_eq!("memory".parse::<StorageEngineKind>().unwrap(), StorageEngineKind::Memory);
        assert_eq!("in-memory".parse::<StorageEngineKind>().unwrap(), StorageEngineKind::Memory);
        assert!("dynamo".parse::<StorageEngineKind>().is_err());
    }

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.session_lifetime_secs, 3600);
        assert_eq!(config.storage_engine, StorageEngineKind::Sled);
        assert!(config.notification_topic.is_none());
    }
}
