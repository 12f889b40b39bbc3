// ABOUTME: Defines the ToolResult type - what a tool hands back to the model
// ABOUTME: on success, plus metadata for logs and tests. Failures are ToolError.

use std::collections::HashMap;

use serde::Serialize;

/// Output of a successful tool execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// The output content.
    pub content: String,

    /// Optional metadata about the execution.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Create a successful result holding a serialized value.
    pub fn json(value: &impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(Self::text(serde_json::to_string(value)?))
    }

    /// Add metadata to the result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), v);
        }
        self
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::text("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_result() {
        let result = ToolResult::text("Hello, world!");
        assert_eq!(result.content, "Hello, world!");
        assert!(result.metadata.is_empty());
    }

    #[test]
    fn test_json_result() {
        let result = ToolResult::json(&vec!["a", "b"]).unwrap();
        assert_eq!(result.content, r#"["a","b"]"#);
    }

    #[test]
    fn test_with_metadata() {
        let result = ToolResult::text("output")
            .with_metadata("thread_id", "125")
            .with_metadata("approved", true);

        assert_eq!(result.metadata["thread_id"], "125");
        assert_eq!(result.metadata["approved"], true);
    }
}
