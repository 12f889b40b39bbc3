// ABOUTME: ContactChannel - where a human is reached for approvals and questions.
// ABOUTME: Fixed per call site; never chosen by the model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A destination a human can be contacted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContactChannel {
    Slack {
        channel_or_user_id: String,
        /// Shown to the model and reviewer, e.g. "a DM with the CEO".
        context_about_channel_or_user: String,
    },
    Email {
        address: String,
    },
    /// The local terminal running the assistant.
    Console,
}

impl ContactChannel {
    /// The CEO's Slack DM.
    pub fn dm_with_ceo(channel_or_user_id: impl Into<String>) -> Self {
        ContactChannel::Slack {
            channel_or_user_id: channel_or_user_id.into(),
            context_about_channel_or_user: "a dm with the ceo".into(),
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactChannel::Slack {
                channel_or_user_id,
                context_about_channel_or_user,
            } => write!(f, "slack:{channel_or_user_id} ({context_about_channel_or_user})"),
            ContactChannel::Email { address } => write!(f, "email:{address}"),
            ContactChannel::Console => f.write_str("console"),
        }
    }
}
