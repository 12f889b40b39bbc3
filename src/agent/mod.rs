// ABOUTME: Agent module - the think-act loop that lets the model drive tools.
// ABOUTME: Provides AgentConfig, the Agent runner, and its run summary.

mod config;
mod runner;

pub use config::AgentConfig;
pub use runner::{Agent, AgentRun, ToolCallRecord};
