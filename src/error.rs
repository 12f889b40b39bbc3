// ABOUTME: Defines all error types for the assistant using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under AssistantError.

use std::time::Duration;

/// Top-level error type for the assistant.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Approval error: {0}")]
    Approval(#[from] ApprovalError),

    #[error("Inbox error: {0}")]
    Inbox(#[from] InboxError),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),
}

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Errors from LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Empty response: {0}")]
    EmptyResponse(String),
}

/// Errors from tool operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters for '{tool}': {message}")]
    InvalidParams { tool: String, message: String },

    #[error(transparent)]
    Approval(#[from] ApprovalError),

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}

/// Outcomes of the approval gate that stop a gated action from running.
#[derive(Debug, thiserror::Error)]
pub enum ApprovalError {
    #[error("'{action}' was denied: {reason}")]
    Denied { action: String, reason: String },

    #[error("approval for '{action}' is still pending")]
    Pending { action: String },

    #[error("no decision for '{action}' within {after:?}")]
    TimedOut { action: String, after: Duration },

    #[error("approval channel unreachable: {0}")]
    Backend(#[source] anyhow::Error),
}

/// Errors from the inbox source.
#[derive(Debug, thiserror::Error)]
pub enum InboxError {
    #[error("inbox unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the agent loop.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Agent exceeded max iterations ({0})")]
    MaxIterations(usize),
}
