// ABOUTME: InboxSource trait and the fixed MockInbox used by the demo.
// ABOUTME: The three mock threads cover spam, genuine interest, and a stalled reply.

use async_trait::async_trait;

use super::{LinkedInMessage, LinkedInThread};
use crate::error::InboxError;

/// Anything that can list the CEO's LinkedIn threads.
#[async_trait]
pub trait InboxSource: Send + Sync {
    /// Return the threads in inbox order.
    async fn list_threads(&self) -> Result<Vec<LinkedInThread>, InboxError>;
}

/// A constant inbox; every call returns the same three threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockInbox;

#[async_trait]
impl InboxSource for MockInbox {
    async fn list_threads(&self) -> Result<Vec<LinkedInThread>, InboxError> {
        Ok(mock_threads())
    }
}

fn thread_url(thread_id: &str) -> String {
    format!("https://linkedin.com/in/msg/{thread_id}")
}

/// The fixed threads behind [`MockInbox`].
pub fn mock_threads() -> Vec<LinkedInThread> {
    vec![
        LinkedInThread::new("123", thread_url("123"), "Danny").message(LinkedInMessage::new(
            "Danny",
            "2024-08-17",
            "Hello, I am wondering if you are interested to try our excellent offshore \
             developer service",
        )),
        LinkedInThread::new("124", thread_url("124"), "Sarah").message(LinkedInMessage::new(
            "Sarah",
            "2024-08-16",
            "Hello, I am interested in your product, what's the best way to get started",
        )),
        LinkedInThread::new("125", thread_url("125"), "Terri")
            .message(LinkedInMessage::new(
                "Terri",
                "2024-08-12",
                "Hello, I am interested in your product, what's the best way to get started",
            ))
            .message(LinkedInMessage::new(
                "you",
                "2024-08-12",
                "I would be happy to give you a demo - please let me know when you're \
                 available, or you can book time at http://calendly.com/im-the-ceo",
            )),
    ]
}
