// lib/src/storage_engine/mod.rs

pub mod inmemory_storage;
pub mod sled_storage;
pub mod storage_engine;

use std::sync::Arc;
use log::{info, warn};

pub use inmemory_storage::InMemoryStorage;
pub use sled_storage::SledStorage;
pub use storage_engine::{index_key, index_scan_prefix, trees, StorageEngine, INDEX_SEPARATOR};

use crate::config::{AppConfig, StorageEngineKind};

/// Open the engine the configuration selects. A sled open failure degrades
/// to the in-memory engine with a warning instead of refusing to start,
/// mirroring the original deployment's tolerated loss of store connectivity.
pub fn open_storage(config: &AppConfig) -> Arc<dyn StorageEngine> {
    match config.storage_engine {
        StorageEngineKind::Memory => {
            info!("using in-memory storage engine (volatile)");
            Arc::new(InMemoryStorage::new())
        }
        StorageEngineKind::Sled => match SledStorage::open(&config.data_dir) {
            Ok(engine) => {
                info!("using sled storage engine at {}", config.data_dir.display());
                Arc::new(engine)
            }
            Err(e) => {
                warn!("sled unavailable ({}), degrading to in-memory storage", e);
                Arc::new(InMemoryStorage::new())
            }
        },
    }
}
