// ABOUTME: AgentConfig - model, sampling, and loop limits for one agent.
// ABOUTME: Built from the startup Config or by hand in tests.

use crate::config::Config;

/// Settings for an agent run.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model to use (e.g., "gpt-4").
    pub model: String,

    pub temperature: Option<f64>,

    /// Optional system prompt sent ahead of the task.
    pub system: Option<String>,

    pub max_tokens: u32,

    /// Maximum iterations for the think-act loop.
    pub max_iterations: usize,
}

impl AgentConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: None,
            system: None,
            max_tokens: 4096,
            max_iterations: 10,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.model)
            .temperature(config.temperature)
            .max_iterations(config.max_iterations)
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }
}
