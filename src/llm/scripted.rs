// ABOUTME: ScriptedClient - a deterministic LlmClient that replays canned responses.
// ABOUTME: Records every request so tests can inspect what the agent sent.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ContentBlock, LlmClient, Request, Response, StopReason, Usage};
use crate::error::LlmError;

/// Replays queued responses in order; errors once the queue runs dry.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response made of the given blocks.
    pub fn then(self, content: Vec<ContentBlock>) -> Self {
        let stop_reason = if content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
        {
            StopReason::ToolUse
        } else {
            StopReason::EndTurn
        };
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(Response {
                content,
                stop_reason,
                usage: Usage {
                    input_tokens: 1,
                    output_tokens: 1,
                },
            });
        }
        self
    }

    /// Queue a single tool call.
    pub fn then_tool(self, id: &str, name: &str, input: serde_json::Value) -> Self {
        self.then(vec![ContentBlock::tool_use(id, name, input)])
    }

    /// Queue a final text answer.
    pub fn then_text(self, text: &str) -> Self {
        self.then(vec![ContentBlock::text(text)])
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .ok_or_else(|| LlmError::EmptyResponse("script exhausted".to_string()))
    }
}
