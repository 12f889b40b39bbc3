// ABOUTME: RequireApproval wraps a tool so it only runs after a human approves.
// ABOUTME: ApprovalGate hands out gated tools and human-as-tool bound to one backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{ApprovalBackend, ApprovalDecision, ApprovalRequest, ContactChannel, HumanAsTool};
use crate::error::{ApprovalError, ToolError};
use crate::tool::{Tool, ToolResult, ToolSchema};

pub const DEFAULT_APPROVAL_TIMEOUT: Duration = Duration::from_secs(300);

/// Factory for approval-gated tools sharing one backend and timeout.
#[derive(Clone)]
pub struct ApprovalGate {
    backend: Arc<dyn ApprovalBackend>,
    timeout: Duration,
}

impl ApprovalGate {
    pub fn new(backend: Arc<dyn ApprovalBackend>) -> Self {
        Self {
            backend,
            timeout: DEFAULT_APPROVAL_TIMEOUT,
        }
    }

    /// Set how long to wait for a human decision.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Gate `tool` behind approvals sent to `channel`.
    pub fn require_approval<T: Tool>(&self, channel: ContactChannel, tool: T) -> RequireApproval<T> {
        RequireApproval {
            inner: tool,
            channel,
            backend: Arc::clone(&self.backend),
            timeout: self.timeout,
        }
    }

    /// A tool that lets the model ask a human on `channel`.
    pub fn human_as_tool(&self, channel: ContactChannel) -> HumanAsTool {
        HumanAsTool::new(channel, Arc::clone(&self.backend)).timeout(self.timeout)
    }
}

/// A tool whose invocations must be approved before they run.
pub struct RequireApproval<T> {
    inner: T,
    channel: ContactChannel,
    backend: Arc<dyn ApprovalBackend>,
    timeout: Duration,
}

impl<T> RequireApproval<T> {
    pub fn channel(&self) -> &ContactChannel {
        &self.channel
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: Tool> Tool for RequireApproval<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn schema(&self) -> ToolSchema {
        self.inner.schema()
    }

    fn requires_approval(&self) -> bool {
        true
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let action = self.inner.name().to_string();

        // Never ask a human about a call that could not run anyway.
        self.inner.schema().validate(&action, &params)?;

        let request = ApprovalRequest::new(self.channel.clone(), &action, params.clone());
        tracing::info!(
            request_id = %request.id,
            action = %action,
            channel = %self.channel,
            "requesting approval"
        );

        let decision =
            match tokio::time::timeout(self.timeout, self.backend.request_approval(&request)).await
            {
                Ok(decision) => decision?,
                Err(_) => {
                    tracing::warn!(request_id = %request.id, action = %action, "approval timed out");
                    return Err(ApprovalError::TimedOut {
                        action,
                        after: self.timeout,
                    }
                    .into());
                }
            };

        match decision {
            ApprovalDecision::Approved => {
                tracing::info!(request_id = %request.id, action = %action, "approved");
                let result = self.inner.execute(params).await?;
                Ok(result.with_metadata("approval_id", &request.id))
            }
            ApprovalDecision::Denied { reason } => {
                tracing::info!(request_id = %request.id, action = %action, ?reason, "denied");
                Err(ApprovalError::Denied {
                    action,
                    reason: reason.unwrap_or_else(|| "no reason given".to_string()),
                }
                .into())
            }
            ApprovalDecision::Pending => {
                tracing::info!(request_id = %request.id, action = %action, "still pending");
                Err(ApprovalError::Pending { action }.into())
            }
        }
    }
}
