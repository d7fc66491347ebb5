// lib/src/auth/session.rs

use std::sync::Arc;
use log::debug;
use uuid::Uuid;
use models::errors::MedResult;
use models::sessions::SessionRecord;

use crate::storage_engine::{trees, StorageEngine};
use crate::stores::{decode, encode};

/// Server-side session records keyed by the opaque token the cookie
/// carries. Lifetime is fixed at creation; expired records are deleted
/// lazily on the resolve that finds them.
#[derive(Clone)]
pub struct SessionStore {
    engine: Arc<dyn StorageEngine>,
    lifetime_secs: i64,
}

impl SessionStore {
    pub fn new(engine: Arc<dyn StorageEngine>, lifetime_secs: i64) -> Self {
        SessionStore { engine, lifetime_secs }
    }

    /// Establish a fresh session for `email` and return its token.
    pub async fn create(&self, email: &str) -> MedResult<Uuid> {
        let session = SessionRecord::new(email, self.lifetime_secs);
        let bytes = encode(&session)?;
        self.engine
            .insert(trees::SESSIONS, session.token.to_string().as_bytes(), bytes)
            .await?;
        Ok(session.token)
    }

    /// Resolve a token to the email it authenticates, or None when the
    /// token is unknown or expired.
    pub async fn resolve(&self, token: Uuid) -> MedResult<Option<String>> {
        let key = token.to_string();
        let Some(bytes) = self.engine.retrieve(trees::SESSIONS, key.as_bytes()).await? else {
            return Ok(None);
        };
        let session: SessionRecord = decode(&bytes)?;
        if session.is_expired() {
            debug!("session {} expired, removing", token);
            self.engine.delete(trees::SESSIONS, key.as_bytes()).await?;
            return Ok(None);
        }
        Ok(Some(session.email))
    }

    /// Unconditional removal; deleting an unknown token is a no-op.
    pub async fn destroy(&self, token: Uuid) -> MedResult<()> {
        self.engine
            .delete(trees::SESSIONS, token.to_string().as_bytes())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_engine::InMemoryStorage;

    #[tokio::test]
    async fn create_resolve_destroy() {
        let store = SessionStore::new(Arc::new(InMemoryStorage::new()), 3600);
        let token = store.create("ann@x.com").await.unwrap();
        assert_eq!(store.resolve(token).await.unwrap().as_deref(), Some("ann@x.com"));

        store.destroy(token).await.unwrap();
        assert_eq!(store.resolve(token).await.unwrap(), None);
        // Destroy is idempotent.
        store.destroy(token).await.unwrap();
    }

    #[tokio::test]
    async fn expired_session_resolves_to_logged_out() {
        let store = SessionStore::new(Arc::new(InMemoryStorage::new()), 0);
        let token = store.create("ann@x.com").await.unwrap();
        assert_eq!(store.resolve(token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_logged_out() {
        let store = SessionStore::new(Arc::new(InMemoryStorage::new()), 3600);
        assert_eq!(store.resolve(Uuid::new_v4()).await.unwrap(), None);
    }
}
