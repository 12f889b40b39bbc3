// ABOUTME: ConsoleApproval - an ApprovalBackend that asks on the local terminal.
// ABOUTME: Prompts go to stderr; one reader thread owns stdin and feeds answers over a channel.

use std::io::{BufRead, Write};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use super::{ApprovalBackend, ApprovalDecision, ApprovalRequest, ContactChannel};
use crate::error::ApprovalError;

/// Approves or answers from the terminal, standing in for the real delivery service.
///
/// Input is read by a single detached thread for the lifetime of the backend,
/// so a prompt abandoned on timeout never leaves a reader blocked on its
/// behalf. Lines typed for an abandoned prompt are dropped before the next
/// prompt is shown.
#[derive(Debug)]
pub struct ConsoleApproval {
    lines: Mutex<mpsc::UnboundedReceiver<String>>,
}

impl ConsoleApproval {
    /// Read answers from stdin.
    pub fn new() -> Self {
        Self::from_reader(std::io::BufReader::new(std::io::stdin()))
    }

    /// Read answers line by line from any blocking reader.
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let spawned = std::thread::Builder::new()
            .name("console-input".to_string())
            .spawn(move || {
                for line in reader.lines() {
                    let Ok(line) = line else { break };
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            });
        if let Err(e) = spawned {
            tracing::warn!(error = %e, "console input unavailable");
        }

        Self {
            lines: Mutex::new(rx),
        }
    }

    async fn prompt(&self, text: &str) -> Result<String, ApprovalError> {
        let mut lines = self.lines.lock().await;

        while let Ok(stale) = lines.try_recv() {
            tracing::debug!(line = %stale, "discarding answer to an expired prompt");
        }

        let mut stderr = std::io::stderr();
        write!(stderr, "{text}")
            .and_then(|()| stderr.flush())
            .map_err(|e| ApprovalError::Backend(e.into()))?;

        let line = lines
            .recv()
            .await
            .ok_or_else(|| ApprovalError::Backend(anyhow::anyhow!("console input closed")))?;
        Ok(line.trim().to_string())
    }
}

impl Default for ConsoleApproval {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret a typed answer.
///
/// `y`/`yes` approves, `n`/`no` denies (anything after the first word becomes
/// the reason), an empty line leaves the request pending.
pub fn parse_decision(answer: &str) -> ApprovalDecision {
    let answer = answer.trim();
    if answer.is_empty() {
        return ApprovalDecision::Pending;
    }
    let (head, rest) = answer
        .split_once(char::is_whitespace)
        .map(|(h, r)| (h, r.trim()))
        .unwrap_or((answer, ""));

    match head.to_ascii_lowercase().as_str() {
        "y" | "yes" => ApprovalDecision::Approved,
        "n" | "no" => ApprovalDecision::Denied {
            reason: (!rest.is_empty()).then(|| rest.to_string()),
        },
        _ => ApprovalDecision::Denied {
            reason: Some(answer.to_string()),
        },
    }
}

#[async_trait]
impl ApprovalBackend for ConsoleApproval {
    async fn request_approval(
        &self,
        request: &ApprovalRequest,
    ) -> Result<ApprovalDecision, ApprovalError> {
        let args = serde_json::to_string_pretty(&request.args)
            .map_err(|e| ApprovalError::Backend(e.into()))?;
        let text = format!(
            "\n[approval {} via {}]\n{} wants to run with:\n{}\nApprove? [y/n <reason>] ",
            request.id, request.channel, request.action, args
        );
        let answer = self.prompt(&text).await?;
        Ok(parse_decision(&answer))
    }

    async fn ask_human(
        &self,
        channel: &ContactChannel,
        question: &str,
    ) -> Result<String, ApprovalError> {
        let text = format!("\n[message via {channel}]\n{question}\n> ");
        self.prompt(&text).await
    }
}
