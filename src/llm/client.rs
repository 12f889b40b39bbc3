// ABOUTME: Defines the LlmClient trait - the seam between the agent loop
// ABOUTME: and whichever chat-completion engine decides on tool calls.

use async_trait::async_trait;

use super::{Request, Response};
use crate::error::LlmError;

/// Trait for chat-completion engines.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Create a message (non-streaming).
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError>;
}
