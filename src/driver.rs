// ABOUTME: Driver - wires inbox, approvals, tools, and the chat engine together
// ABOUTME: and runs the assistant once on the fixed task prompt.

use std::sync::Arc;

use crate::agent::{Agent, AgentConfig, AgentRun};
use crate::approval::{ApprovalBackend, ApprovalGate, ContactChannel};
use crate::config::Config;
use crate::error::AssistantError;
use crate::inbox::InboxSource;
use crate::llm::LlmClient;
use crate::prompt::TASK_PROMPT;
use crate::tools::{Outbox, build_registry};

/// A fully wired inbox assistant.
pub struct Assistant {
    agent: Agent,
    outbox: Outbox,
    channel: ContactChannel,
}

impl Assistant {
    /// Build the registry and agent from configuration and collaborators.
    pub async fn assemble(
        config: &Config,
        inbox: Arc<dyn InboxSource>,
        approvals: Arc<dyn ApprovalBackend>,
        client: Arc<dyn LlmClient>,
    ) -> Self {
        let channel = ContactChannel::dm_with_ceo(&config.ceo_channel);
        let gate = ApprovalGate::new(approvals).timeout(config.approval_timeout);
        let outbox = Outbox::new();
        let registry = build_registry(inbox, outbox.clone(), &gate, channel.clone()).await;

        let tools = registry.list().await;
        tracing::info!(?tools, channel = %channel, "assistant assembled");

        Self {
            agent: Agent::new(AgentConfig::from_config(config), client, registry),
            outbox,
            channel,
        }
    }

    /// Messages actually sent during runs.
    pub fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    pub fn channel(&self) -> &ContactChannel {
        &self.channel
    }

    /// Run once on the standard task.
    pub async fn run(&self) -> Result<AgentRun, AssistantError> {
        self.run_task(TASK_PROMPT).await
    }

    /// Run once on an arbitrary task.
    pub async fn run_task(&self, task: &str) -> Result<AgentRun, AssistantError> {
        let run = self.agent.run(task).await?;
        tracing::info!(
            iterations = run.iterations,
            tool_calls = run.tool_calls.len(),
            input_tokens = run.usage.input_tokens,
            output_tokens = run.usage.output_tokens,
            "run complete"
        );
        Ok(run)
    }
}
