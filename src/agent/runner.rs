// ABOUTME: Agent runner - executes the think-act loop against a tool registry.
// ABOUTME: Tool failures, approval denials included, go back to the model as error results.

use std::sync::Arc;

use uuid::Uuid;

use super::AgentConfig;
use crate::error::AgentError;
use crate::llm::{ContentBlock, LlmClient, Message, Request, Usage};
use crate::tool::Registry;

/// One tool invocation made during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallRecord {
    pub name: String,
    pub input: serde_json::Value,
    pub output: String,
    pub is_error: bool,
}

/// Result from running an agent.
#[derive(Debug, Clone)]
pub struct AgentRun {
    /// Unique identifier for this agent run.
    pub agent_id: String,

    /// Final text content from the model.
    pub content: String,

    /// Every tool call, in the order they ran.
    pub tool_calls: Vec<ToolCallRecord>,

    /// Total token usage across all LLM calls.
    pub usage: Usage,

    /// Number of iterations in the think-act loop.
    pub iterations: usize,
}

/// A chat agent that may call the tools in its registry.
pub struct Agent {
    config: AgentConfig,
    client: Arc<dyn LlmClient>,
    tools: Registry,
}

impl Agent {
    pub fn new(config: AgentConfig, client: Arc<dyn LlmClient>, tools: Registry) -> Self {
        Self {
            config,
            client,
            tools,
        }
    }

    /// Run the agent on a task and return the result.
    pub async fn run(&self, task: &str) -> Result<AgentRun, AgentError> {
        let agent_id = Uuid::new_v4().to_string();
        let mut messages = vec![Message::user(task)];
        let mut tool_calls = Vec::new();
        let mut usage = Usage::default();
        let definitions = self.tools.to_definitions().await;

        tracing::info!(%agent_id, model = %self.config.model, tools = definitions.len(), "agent started");

        for iteration in 1..=self.config.max_iterations {
            let request = Request {
                model: self.config.model.clone(),
                system: self.config.system.clone(),
                messages: messages.clone(),
                tools: definitions.clone(),
                max_tokens: Some(self.config.max_tokens),
                temperature: self.config.temperature,
            };

            let response = self.client.create_message(&request).await?;
            usage += response.usage;

            if response.tool_calls().next().is_none() {
                tracing::info!(%agent_id, iterations = iteration, "agent finished");
                return Ok(AgentRun {
                    agent_id,
                    content: response.text(),
                    tool_calls,
                    usage,
                    iterations: iteration,
                });
            }

            let mut results = Vec::new();
            for (id, name, input) in response.tool_calls() {
                tracing::info!(%agent_id, iteration, tool = %name, "tool call");

                let (output, is_error) = match self.tools.execute(name, input.clone()).await {
                    Ok(result) => (result.content, false),
                    Err(e) => {
                        tracing::warn!(%agent_id, tool = %name, error = %e, "tool call failed");
                        (e.to_string(), true)
                    }
                };

                results.push(ContentBlock::tool_result(id, &output, is_error));
                tool_calls.push(ToolCallRecord {
                    name: name.to_string(),
                    input: input.clone(),
                    output,
                    is_error,
                });
            }

            messages.push(Message::assistant(response.content));
            messages.push(Message::tool_results(results));
        }

        Err(AgentError::MaxIterations(self.config.max_iterations))
    }
}
