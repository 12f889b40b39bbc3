// ABOUTME: Built-in tools for the inbox assistant.
// ABOUTME: Inbox fetch, approval-gated send, current time, and registry assembly.

mod get_time;
mod linkedin;
mod outbox;

pub use get_time::GetTimeTool;
pub use linkedin::{GetLinkedInThreadsTool, SendLinkedInMessageTool};
pub use outbox::{Outbox, SentMessage};

use std::sync::Arc;

use crate::approval::{ApprovalGate, ContactChannel};
use crate::inbox::InboxSource;
use crate::tool::Registry;

/// Assemble the assistant's tools.
///
/// Sending is gated behind approvals on `channel`, and the human-as-tool
/// reaches the same channel.
pub async fn build_registry(
    inbox: Arc<dyn InboxSource>,
    outbox: Outbox,
    gate: &ApprovalGate,
    channel: ContactChannel,
) -> Registry {
    let registry = Registry::new();
    registry.register(GetLinkedInThreadsTool::new(inbox)).await;
    registry
        .register(gate.require_approval(channel.clone(), SendLinkedInMessageTool::new(outbox)))
        .await;
    registry.register(gate.human_as_tool(channel)).await;
    registry.register(GetTimeTool).await;
    registry
}
