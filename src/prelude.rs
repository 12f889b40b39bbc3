// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use inbox_assistant::prelude::*;` to get started quickly.

pub use crate::agent::{Agent, AgentConfig, AgentRun, ToolCallRecord};
pub use crate::approval::{
    AlwaysApprove, AlwaysDeny, ApprovalBackend, ApprovalDecision, ApprovalGate, ApprovalRequest,
    ConsoleApproval, ContactChannel, HumanAsTool, RequireApproval,
};
pub use crate::config::Config;
pub use crate::error::{
    AgentError, ApprovalError, AssistantError, ConfigError, InboxError, LlmError, ToolError,
};
pub use crate::inbox::{InboxSource, LinkedInMessage, LinkedInThread, MockInbox, mock_threads};
pub use crate::llm::{
    ContentBlock, LlmClient, Message, OpenAIClient, Request, Response, Role, ScriptedClient,
    StopReason, ToolDefinition, Usage,
};
pub use crate::tool::{ParamKind, ParamSpec, Registry, Tool, ToolResult, ToolSchema};
pub use crate::tools::{
    GetLinkedInThreadsTool, GetTimeTool, Outbox, SendLinkedInMessageTool, SentMessage,
    build_registry,
};
