// ABOUTME: Root module for inbox-assistant - a LinkedIn inbox agent whose
// ABOUTME: side-effecting tools wait for human approval before they run.

pub mod agent;
pub mod approval;
pub mod config;
pub mod driver;
pub mod error;
pub mod inbox;
pub mod llm;
pub mod prelude;
pub mod prompt;
pub mod tool;
pub mod tools;

pub use error::AssistantError;
