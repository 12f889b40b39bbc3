// ABOUTME: Defines the ApprovalBackend trait - the external service that delivers
// ABOUTME: approval requests and questions to a human and returns their answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ContactChannel;
use crate::error::ApprovalError;

/// A request for a human to approve one tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    /// Unique identifier for this approval request.
    pub id: String,
    pub channel: ContactChannel,
    /// Name of the gated action.
    pub action: String,
    /// The exact arguments the action will run with.
    pub args: serde_json::Value,
}

impl ApprovalRequest {
    pub fn new(channel: ContactChannel, action: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            channel,
            action: action.into(),
            args,
        }
    }
}

/// What the human decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApprovalDecision {
    Approved,
    Denied { reason: Option<String> },
    /// No decision yet.
    Pending,
}

/// Trait for approval services.
#[async_trait]
pub trait ApprovalBackend: Send + Sync {
    /// Ask for approval of a single invocation.
    async fn request_approval(
        &self,
        request: &ApprovalRequest,
    ) -> Result<ApprovalDecision, ApprovalError>;

    /// Pose a free-form question and return the answer.
    async fn ask_human(
        &self,
        channel: &ContactChannel,
        question: &str,
    ) -> Result<String, ApprovalError>;
}

/// A backend that approves everything.
pub struct AlwaysApprove;

#[async_trait]
impl ApprovalBackend for AlwaysApprove {
    async fn request_approval(
        &self,
        _request: &ApprovalRequest,
    ) -> Result<ApprovalDecision, ApprovalError> {
        Ok(ApprovalDecision::Approved)
    }

    async fn ask_human(
        &self,
        _channel: &ContactChannel,
        _question: &str,
    ) -> Result<String, ApprovalError> {
        Ok("yes".to_string())
    }
}

/// A backend that denies everything.
pub struct AlwaysDeny;

#[async_trait]
impl ApprovalBackend for AlwaysDeny {
    async fn request_approval(
        &self,
        _request: &ApprovalRequest,
    ) -> Result<ApprovalDecision, ApprovalError> {
        Ok(ApprovalDecision::Denied { reason: None })
    }

    async fn ask_human(
        &self,
        _channel: &ContactChannel,
        _question: &str,
    ) -> Result<String, ApprovalError> {
        Ok("no".to_string())
    }
}
