// ABOUTME: GetTimeTool - returns the current local time in RFC 3339.
// ABOUTME: Lets the model reason about how old inbox messages are.

use async_trait::async_trait;

use crate::error::ToolError;
use crate::tool::{Tool, ToolResult, ToolSchema};

/// Tool for reading the clock.
pub struct GetTimeTool;

#[async_trait]
impl Tool for GetTimeTool {
    fn name(&self) -> &str {
        "get_time"
    }

    fn description(&self) -> &str {
        "Get the current time."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::empty()
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, ToolError> {
        Ok(ToolResult::text(chrono::Local::now().to_rfc3339()))
    }
}
