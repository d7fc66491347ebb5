// lib/src/notifier/mod.rs
//
// Fire-and-forget announcement channel for account-creation and booking
// events. Delivery is best-effort: a full queue or a dead delivery task is
// logged and swallowed, never surfaced to the request that triggered it.

use async_trait::async_trait;
use log::{info, warn};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct Announcement {
    pub subject: String,
    pub message: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, subject: &str, message: &str);
}

/// Delivers announcements to a named topic through a background task fed by
/// a bounded channel. The task is the delivery seam; today it logs each
/// announcement, which is where an SNS/webhook client would plug in.
pub struct TopicNotifier {
    topic: String,
    tx: mpsc::Sender<Announcement>,
}

impl TopicNotifier {
    pub fn new(topic: &str) -> Self {
        let (tx, mut rx) = mpsc::channel::<Announcement>(64);
        let task_topic = topic.to_string();
        tokio::spawn(async move {
            while let Some(announcement) = rx.recv().await {
                info!(
                    "[topic {}] {}: {}",
                    task_topic, announcement.subject, announcement.message
                );
            }
        });
        TopicNotifier {
            topic: topic.to_string(),
            tx,
        }
    }
}

#[async_trait]
impl Notifier for TopicNotifier {
    async fn publish(&self, subject: &str, message: &str) {
        let announcement = Announcement {
            subject: subject.to_string(),
            message: message.to_string(),
        };
        if let Err(e) = self.tx.try_send(announcement) {
            warn!("dropping announcement for topic {}: {}", self.topic, e);
        }
    }
}

/// Used when no topic is configured; publishes vanish silently.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn publish(&self, _subject: &str, _message: &str) {}
}

/// Pick the notifier the configuration calls for.
pub fn build_notifier(topic: Option<&str>) -> std::sync::Arc<dyn Notifier> {
    match topic {
        Some(topic) => std::sync::Arc::new(TopicNotifier::new(topic)),
        None => {
            info!("no notification topic configured, announcements disabled");
            std::sync::Arc::new(NoopNotifier)
        }
    }
}
