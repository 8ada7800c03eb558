//! Account lifecycle events
//!
//! The transport (queue, topic, webhook) is deployment-specific and outside
//! this service; the command services only depend on the trait.

use tracing::info;

pub trait EventPublisher: Send + Sync {
    fn user_registered(&self, user_id: i64, username: &str);
    fn user_authenticated(&self, user_id: i64, username: &str);
}

/// Publishes to the log stream only.
pub struct LogEventPublisher;

impl EventPublisher for LogEventPublisher {
    fn user_registered(&self, user_id: i64, username: &str) {
        info!(user_id, username, "user registered");
    }

    fn user_authenticated(&self, user_id: i64, username: &str) {
        info!(user_id, username, "user authenticated");
    }
}
