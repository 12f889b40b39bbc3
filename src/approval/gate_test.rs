// ABOUTME: Tests for RequireApproval - the send side effect only happens on approval.
// ABOUTME: Covers approved, denied, pending, timeout, backend failure, and bad args.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use super::*;
use crate::error::{ApprovalError, ToolError};
use crate::tool::Tool;
use crate::tools::{Outbox, SendLinkedInMessageTool};

/// Records every request and answers with a fixed decision.
struct ScriptedBackend {
    decision: ApprovalDecision,
    requests: Mutex<Vec<ApprovalRequest>>,
}

impl ScriptedBackend {
    fn new(decision: ApprovalDecision) -> Arc<Self> {
        Arc::new(Self {
            decision,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ApprovalBackend for ScriptedBackend {
    async fn request_approval(
        &self,
        request: &ApprovalRequest,
    ) -> Result<ApprovalDecision, ApprovalError> {
        self.requests.lock().await.push(request.clone());
        Ok(self.decision.clone())
    }

    async fn ask_human(
        &self,
        _channel: &ContactChannel,
        question: &str,
    ) -> Result<String, ApprovalError> {
        Ok(format!("answer to: {question}"))
    }
}

/// Never answers.
struct SilentBackend;

#[async_trait]
impl ApprovalBackend for SilentBackend {
    async fn request_approval(
        &self,
        _request: &ApprovalRequest,
    ) -> Result<ApprovalDecision, ApprovalError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(ApprovalDecision::Approved)
    }

    async fn ask_human(
        &self,
        _channel: &ContactChannel,
        _question: &str,
    ) -> Result<String, ApprovalError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(String::new())
    }
}

/// Cannot reach anyone.
struct BrokenBackend;

#[async_trait]
impl ApprovalBackend for BrokenBackend {
    async fn request_approval(
        &self,
        _request: &ApprovalRequest,
    ) -> Result<ApprovalDecision, ApprovalError> {
        Err(ApprovalError::Backend(anyhow::anyhow!("connection refused")))
    }

    async fn ask_human(
        &self,
        _channel: &ContactChannel,
        _question: &str,
    ) -> Result<String, ApprovalError> {
        Err(ApprovalError::Backend(anyhow::anyhow!("connection refused")))
    }
}

fn send_args() -> serde_json::Value {
    json!({"thread_id": "125", "to_name": "Terri", "msg": "Does Thursday work?"})
}

fn gated_send(
    backend: Arc<dyn ApprovalBackend>,
    outbox: &Outbox,
) -> RequireApproval<SendLinkedInMessageTool> {
    ApprovalGate::new(backend).require_approval(
        ContactChannel::dm_with_ceo("ceo"),
        SendLinkedInMessageTool::new(outbox.clone()),
    )
}

#[tokio::test]
async fn test_approved_runs_inner_tool() {
    let backend = ScriptedBackend::new(ApprovalDecision::Approved);
    let outbox = Outbox::new();
    let tool = gated_send(backend.clone(), &outbox);

    let result = tool.execute(send_args()).await.unwrap();

    assert_eq!(result.content, "message successfully sent to Terri");
    assert_eq!(outbox.sent().await.len(), 1);

    let requests = backend.requests.lock().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].action, "send_linkedin_message");
    assert_eq!(requests[0].args, send_args());
    assert_eq!(requests[0].channel, ContactChannel::dm_with_ceo("ceo"));
    assert_eq!(result.metadata["approval_id"], requests[0].id.as_str());
}

#[tokio::test]
async fn test_denied_has_no_side_effect() {
    let backend = ScriptedBackend::new(ApprovalDecision::Denied {
        reason: Some("wait until Monday".into()),
    });
    let outbox = Outbox::new();
    let tool = gated_send(backend.clone(), &outbox);

    let err = tool.execute(send_args()).await.unwrap_err();

    match err {
        ToolError::Approval(ApprovalError::Denied { action, reason }) => {
            assert_eq!(action, "send_linkedin_message");
            assert_eq!(reason, "wait until Monday");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(outbox.is_empty().await);
}

#[tokio::test]
async fn test_pending_has_no_side_effect() {
    let backend = ScriptedBackend::new(ApprovalDecision::Pending);
    let outbox = Outbox::new();
    let tool = gated_send(backend, &outbox);

    let err = tool.execute(send_args()).await.unwrap_err();

    assert!(matches!(
        err,
        ToolError::Approval(ApprovalError::Pending { .. })
    ));
    assert!(outbox.is_empty().await);
}

#[tokio::test]
async fn test_timeout_has_no_side_effect() {
    let outbox = Outbox::new();
    let tool = ApprovalGate::new(Arc::new(SilentBackend))
        .timeout(Duration::from_millis(20))
        .require_approval(
            ContactChannel::Console,
            SendLinkedInMessageTool::new(outbox.clone()),
        );

    let err = tool.execute(send_args()).await.unwrap_err();

    assert!(matches!(
        err,
        ToolError::Approval(ApprovalError::TimedOut { .. })
    ));
    assert_eq!(
        err.to_string(),
        "no decision for 'send_linkedin_message' within 20ms"
    );
    assert!(outbox.is_empty().await);
}

#[tokio::test]
async fn test_unreachable_backend_has_no_side_effect() {
    let outbox = Outbox::new();
    let tool = gated_send(Arc::new(BrokenBackend), &outbox);

    let err = tool.execute(send_args()).await.unwrap_err();

    assert!(matches!(
        err,
        ToolError::Approval(ApprovalError::Backend(_))
    ));
    assert!(outbox.is_empty().await);
}

#[tokio::test]
async fn test_invalid_args_never_reach_backend() {
    let backend = ScriptedBackend::new(ApprovalDecision::Approved);
    let outbox = Outbox::new();
    let tool = gated_send(backend.clone(), &outbox);

    let err = tool
        .execute(json!({"thread_id": "125", "to_name": "Terri"}))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::InvalidParams { .. }));
    assert!(backend.requests.lock().await.is_empty());
    assert!(outbox.is_empty().await);
}

#[tokio::test]
async fn test_wrapper_keeps_inner_identity() {
    let outbox = Outbox::new();
    let tool = gated_send(Arc::new(AlwaysDeny), &outbox);

    assert_eq!(tool.name(), "send_linkedin_message");
    assert_eq!(tool.description(), "Send a message in a LinkedIn thread.");
    assert_eq!(tool.schema(), tool.inner().schema());
    assert!(tool.requires_approval());
    assert!(!tool.inner().requires_approval());
    assert_eq!(tool.channel(), &ContactChannel::dm_with_ceo("ceo"));
}

#[tokio::test]
async fn test_each_call_is_approved_separately() {
    let backend = ScriptedBackend::new(ApprovalDecision::Approved);
    let outbox = Outbox::new();
    let tool = gated_send(backend.clone(), &outbox);

    tool.execute(send_args()).await.unwrap();
    tool.execute(send_args()).await.unwrap();

    let requests = backend.requests.lock().await;
    assert_eq!(requests.len(), 2);
    assert_ne!(requests[0].id, requests[1].id);
}

#[tokio::test]
async fn test_human_as_tool_returns_answer() {
    let backend = ScriptedBackend::new(ApprovalDecision::Approved);
    let tool = ApprovalGate::new(backend).human_as_tool(ContactChannel::dm_with_ceo("ceo"));

    let result = tool
        .execute(json!({"message": "Reply to Sarah?"}))
        .await
        .unwrap();

    assert_eq!(tool.name(), "contact_human");
    assert_eq!(result.content, "answer to: Reply to Sarah?");
}

#[tokio::test]
async fn test_human_as_tool_timeout() {
    let tool = ApprovalGate::new(Arc::new(SilentBackend))
        .timeout(Duration::from_millis(20))
        .human_as_tool(ContactChannel::Console);

    let err = tool
        .execute(json!({"message": "Anyone there?"}))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ToolError::Approval(ApprovalError::TimedOut { .. })
    ));
    assert!(err.to_string().ends_with("within 20ms"));
}
