// ABOUTME: Entry point - runs the LinkedIn inbox assistant once and prints its answer.
// ABOUTME: Approvals and questions for the CEO are answered on this terminal.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use inbox_assistant::driver::Assistant;
use inbox_assistant::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let assistant = Assistant::assemble(
        &config,
        Arc::new(MockInbox),
        Arc::new(ConsoleApproval::new()),
        Arc::new(OpenAIClient::from_config(&config)),
    )
    .await;

    let run = assistant.run().await?;

    println!("\n\n----------Result----------\n\n");
    println!("{}", run.content);

    Ok(())
}
