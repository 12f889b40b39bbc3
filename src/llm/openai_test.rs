// ABOUTME: Tests for the OpenAI client - request shape, response parsing,
// ABOUTME: and HTTP behaviour against a local mockito server.

use serde_json::json;

use super::*;
use crate::error::LlmError;

fn hello() -> Request {
    Request {
        model: "gpt-4".into(),
        messages: vec![Message::user("hi")],
        ..Default::default()
    }
}

#[test]
fn test_request_conversion() {
    let req = Request {
        model: "gpt-4".into(),
        system: Some("Be helpful".into()),
        messages: vec![
            Message::user("Check the inbox"),
            Message::assistant(vec![ContentBlock::tool_use(
                "call_1",
                "get_linkedin_threads",
                json!({}),
            )]),
            Message::tool_results(vec![ContentBlock::tool_result("call_1", "[]", false)]),
        ],
        temperature: Some(0.0),
        ..Default::default()
    };

    let openai_req = OpenAIRequest::from(&req);
    let roles: Vec<_> = openai_req.messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, vec!["system", "user", "assistant", "tool"]);

    let assistant = &openai_req.messages[2];
    assert!(assistant.content.is_none());
    let calls = assistant.tool_calls.as_ref().unwrap();
    assert_eq!(calls[0].function.name, "get_linkedin_threads");
    assert_eq!(calls[0].function.arguments, "{}");

    assert_eq!(openai_req.messages[3].tool_call_id.as_deref(), Some("call_1"));
    assert_eq!(openai_req.temperature, Some(0.0));
}

#[test]
fn test_request_json_omits_empty_fields() {
    let req = hello();
    let json = serde_json::to_value(OpenAIRequest::from(&req)).unwrap();

    assert!(json.get("tools").is_none());
    assert!(json.get("max_tokens").is_none());
    assert!(json["messages"][0].get("tool_calls").is_none());
}

#[test]
fn test_tool_definition_conversion() {
    let tool = ToolDefinition {
        name: "send_linkedin_message".to_string(),
        description: "Send a message in a LinkedIn thread.".to_string(),
        input_schema: json!({"type": "object", "properties": {}}),
    };

    let openai_tool = OpenAITool::from(&tool);
    assert_eq!(openai_tool.tool_type, "function");
    assert_eq!(openai_tool.function.name, "send_linkedin_message");
}

#[test]
fn test_tool_call_response() {
    let raw = json!({
        "id": "chatcmpl-1",
        "model": "gpt-4",
        "choices": [{
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_9",
                    "type": "function",
                    "function": {
                        "name": "send_linkedin_message",
                        "arguments": "{\"thread_id\":\"125\",\"to_name\":\"Terri\",\"msg\":\"hi\"}"
                    }
                }]
            },
            "finish_reason": "tool_calls"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 7}
    });

    let resp: OpenAIResponse = serde_json::from_value(raw).unwrap();
    let response = Response::try_from(resp).unwrap();

    assert_eq!(response.stop_reason, StopReason::ToolUse);
    assert_eq!(response.tool_calls().count(), 1);
    assert_eq!(response.usage.input_tokens, 12);
    match &response.content[0] {
        ContentBlock::ToolUse { id, input, .. } => {
            assert_eq!(id, "call_9");
            assert_eq!(input["to_name"], "Terri");
        }
        other => panic!("expected tool use, got {other:?}"),
    }
}

#[test]
fn test_malformed_tool_arguments_kept_as_string() {
    let raw = json!({
        "id": "chatcmpl-3",
        "model": "gpt-4",
        "choices": [{
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {"name": "send_linkedin_message", "arguments": "{\"thread_id\": \"125\""}
                }]
            },
            "finish_reason": "tool_calls"
        }]
    });

    let resp: OpenAIResponse = serde_json::from_value(raw).unwrap();
    let response = Response::try_from(resp).unwrap();

    let (id, name, input) = response.tool_calls().next().unwrap();
    assert_eq!((id, name), ("call_1", "send_linkedin_message"));
    assert_eq!(input, &json!("{\"thread_id\": \"125\""));
}

#[test]
fn test_empty_choices_is_error() {
    let resp: OpenAIResponse =
        serde_json::from_value(json!({"id": "x", "model": "gpt-4", "choices": []})).unwrap();
    assert!(matches!(
        Response::try_from(resp),
        Err(LlmError::EmptyResponse(_))
    ));
}

#[tokio::test]
async fn test_create_message_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-2",
                "model": "gpt-4",
                "choices": [{
                    "message": {"role": "assistant", "content": "Inbox summary sent."},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenAIClient::new("sk-test").with_base_url(format!("{}/v1/", server.url()));
    let response = client
        .create_message(&hello())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.text(), "Inbox summary sent.");
    assert_eq!(response.stop_reason, StopReason::EndTurn);
}

#[tokio::test]
async fn test_create_message_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#)
        .create_async()
        .await;

    let client = OpenAIClient::new("sk-bad").with_base_url(server.url());
    let err = client
        .create_message(&hello())
        .await
        .unwrap_err();

    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_message_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "chatcmpl-4", "choices": "#)
        .create_async()
        .await;

    let client = OpenAIClient::new("sk-test").with_base_url(server.url());
    let err = client.create_message(&hello()).await.unwrap_err();

    assert!(matches!(err, LlmError::Deserialize(_)));
}
