// ABOUTME: Outbox - records messages the assistant actually sent.
// ABOUTME: Stands in for the LinkedIn send API; clones share one log.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

/// A message that left the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentMessage {
    pub thread_id: String,
    pub to_name: String,
    pub msg: String,
}

/// Shared log of sent messages.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, message: SentMessage) {
        self.sent.lock().await.push(message);
    }

    /// Everything sent so far, oldest first.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.sent.lock().await.is_empty()
    }
}
