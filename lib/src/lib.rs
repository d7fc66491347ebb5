// lib/src/lib.rs

pub mod auth;
pub mod config;
pub mod notifier;
pub mod services;
pub mod storage_engine;
pub mod stores;

pub use config::{AppConfig, StorageEngineKind};
pub use storage_engine::{open_storage, StorageEngine};

// Re-export the error types so downstream crates can use `lib::errors::…`
// without also depending on models directly.
pub use models::errors;
