// models/src/sessions.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Server-side session record. The cookie carries only the opaque token;
/// everything else stays in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Hard expiry, fixed at creation. No refresh-on-activity.
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(email: &str, lifetime_secs: i64) -> Self {
        let now = Utc::now();
        SessionRecord {
            token: Uuid::new_v4(),
            email: email.to_string(),
            created_at: now,
            expires_at: now + Duration::seconds(lifetime_secs),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
