// ABOUTME: Defines the Tool trait - the core abstraction for agent capabilities.
// ABOUTME: Tools have a name, description, declared schema, and async execute method.

use async_trait::async_trait;

use super::{ToolResult, ToolSchema};
use crate::error::ToolError;

/// A tool that can be executed by an agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the LLM.
    fn description(&self) -> &str;

    /// Returns the declared input parameters.
    fn schema(&self) -> ToolSchema;

    /// Whether invocations must be approved by a human first.
    fn requires_approval(&self) -> bool {
        false
    }

    /// Execute the tool with the given parameters.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError>;
}
