// ABOUTME: Data model for the inbox - messages and the threads that hold them.
// ABOUTME: Serialized to JSON when handed to the model.

use serde::{Deserialize, Serialize};

/// Sender name used for messages the CEO wrote.
pub const SELF_SENDER: &str = "you";

/// A single message inside a LinkedIn thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInMessage {
    pub from_name: String,
    pub date: String,
    pub message: String,
}

impl LinkedInMessage {
    pub fn new(
        from_name: impl Into<String>,
        date: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            from_name: from_name.into(),
            date: date.into(),
            message: message.into(),
        }
    }
}

/// A conversation between the CEO and one counterpart.
///
/// Messages are kept in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInThread {
    pub thread_id: String,
    pub thread_url: String,
    pub with_name: String,
    pub messages: Vec<LinkedInMessage>,
}

impl LinkedInThread {
    pub fn new(
        thread_id: impl Into<String>,
        thread_url: impl Into<String>,
        with_name: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            thread_url: thread_url.into(),
            with_name: with_name.into(),
            messages: Vec::new(),
        }
    }

    /// Append a message; callers add them oldest first.
    pub fn message(mut self, message: LinkedInMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn last_message(&self) -> Option<&LinkedInMessage> {
        self.messages.last()
    }

    /// True when the CEO wrote last and the counterpart has not answered.
    pub fn awaiting_reply(&self) -> bool {
        self.last_message()
            .is_some_and(|m| m.from_name == SELF_SENDER)
    }
}
