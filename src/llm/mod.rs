// ABOUTME: LLM module - chat-completion client abstraction for the agent.
// ABOUTME: Provider-neutral types, the LlmClient trait, OpenAI and scripted clients.

mod client;
mod openai;
mod scripted;
mod types;

pub use client::*;
pub use openai::*;
pub use scripted::*;
pub use types::*;

#[cfg(test)]
mod openai_test;
