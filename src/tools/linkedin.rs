// ABOUTME: LinkedIn tools - list inbox threads and send a reply in a thread.
// ABOUTME: Sending is a side effect; register it behind RequireApproval.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{Outbox, SentMessage};
use crate::error::ToolError;
use crate::inbox::InboxSource;
use crate::tool::{ParamKind, Tool, ToolResult, ToolSchema};

/// Tool for fetching the inbox.
pub struct GetLinkedInThreadsTool {
    inbox: Arc<dyn InboxSource>,
}

impl GetLinkedInThreadsTool {
    pub fn new(inbox: Arc<dyn InboxSource>) -> Self {
        Self { inbox }
    }
}

#[async_trait]
impl Tool for GetLinkedInThreadsTool {
    fn name(&self) -> &str {
        "get_linkedin_threads"
    }

    fn description(&self) -> &str {
        "Fetch LinkedIn threads from the inbox."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::empty()
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let threads = self
            .inbox
            .list_threads()
            .await
            .map_err(|e| ToolError::Execution(e.into()))?;

        tracing::debug!(count = threads.len(), "fetched linkedin threads");

        let result = ToolResult::json(&threads).map_err(|e| ToolError::Execution(e.into()))?;
        Ok(result.with_metadata("thread_count", threads.len()))
    }
}

/// Tool for replying in a LinkedIn thread.
pub struct SendLinkedInMessageTool {
    outbox: Outbox,
}

impl SendLinkedInMessageTool {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }
}

#[async_trait]
impl Tool for SendLinkedInMessageTool {
    fn name(&self) -> &str {
        "send_linkedin_message"
    }

    fn description(&self) -> &str {
        "Send a message in a LinkedIn thread."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::empty()
            .required("thread_id", ParamKind::String, "The thread to send the message in")
            .required("to_name", ParamKind::String, "Name of the recipient")
            .required("msg", ParamKind::String, "The message body")
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        #[derive(Deserialize)]
        struct Params {
            thread_id: String,
            to_name: String,
            msg: String,
        }
        let params: Params =
            serde_json::from_value(params).map_err(|e| ToolError::InvalidParams {
                tool: self.name().to_string(),
                message: e.to_string(),
            })?;

        let confirmation = format!("message successfully sent to {}", params.to_name);
        self.outbox
            .push(SentMessage {
                thread_id: params.thread_id,
                to_name: params.to_name,
                msg: params.msg,
            })
            .await;

        Ok(ToolResult::text(confirmation))
    }
}
