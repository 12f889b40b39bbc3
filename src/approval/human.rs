// ABOUTME: HumanAsTool - lets the model put a free-form question to a human
// ABOUTME: on a fixed channel and returns the answer as the tool result.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{ApprovalBackend, ContactChannel, DEFAULT_APPROVAL_TIMEOUT};
use crate::error::{ApprovalError, ToolError};
use crate::tool::{ParamKind, Tool, ToolResult, ToolSchema};

/// Tool for contacting a human.
pub struct HumanAsTool {
    channel: ContactChannel,
    backend: Arc<dyn ApprovalBackend>,
    timeout: Duration,
}

impl HumanAsTool {
    pub fn new(channel: ContactChannel, backend: Arc<dyn ApprovalBackend>) -> Self {
        Self {
            channel,
            backend,
            timeout: DEFAULT_APPROVAL_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Tool for HumanAsTool {
    fn name(&self) -> &str {
        "contact_human"
    }

    fn description(&self) -> &str {
        "Allow the agent to contact the CEO for approval."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::empty().required(
            "message",
            ParamKind::String,
            "The summary or question to send to the human",
        )
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        #[derive(Deserialize)]
        struct Params {
            message: String,
        }
        let params: Params =
            serde_json::from_value(params).map_err(|e| ToolError::InvalidParams {
                tool: self.name().to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(channel = %self.channel, "contacting human");

        let answer = tokio::time::timeout(
            self.timeout,
            self.backend.ask_human(&self.channel, &params.message),
        )
        .await
        .map_err(|_| ApprovalError::TimedOut {
            action: self.name().to_string(),
            after: self.timeout,
        })??;

        Ok(ToolResult::text(answer))
    }
}
