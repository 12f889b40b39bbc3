// ABOUTME: Tests for MockInbox - contents, ordering, and idempotence.
// ABOUTME: Thread 125 is the one with a reply from the CEO.

use super::*;

#[tokio::test]
async fn test_list_threads_non_empty() {
    let threads = MockInbox.list_threads().await.unwrap();

    let ids: Vec<_> = threads.iter().map(|t| t.thread_id.as_str()).collect();
    assert_eq!(ids, vec!["123", "124", "125"]);
    assert!(threads.iter().all(|t| !t.messages.is_empty()));
}

#[tokio::test]
async fn test_message_order_preserved() {
    let threads = MockInbox.list_threads().await.unwrap();
    let terri = threads.iter().find(|t| t.thread_id == "125").unwrap();

    assert_eq!(terri.with_name, "Terri");
    assert_eq!(terri.messages.len(), 2);
    assert_eq!(terri.messages[0].from_name, "Terri");
    assert_eq!(terri.messages[1].from_name, "you");
    assert!(terri.messages[1].message.contains("calendly.com/im-the-ceo"));
}

#[tokio::test]
async fn test_list_threads_idempotent() {
    let first = MockInbox.list_threads().await.unwrap();
    let second = MockInbox.list_threads().await.unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_thread_urls_follow_id() {
    for thread in mock_threads() {
        assert_eq!(
            thread.thread_url,
            format!("https://linkedin.com/in/msg/{}", thread.thread_id)
        );
    }
}

#[test]
fn test_only_terri_awaiting_reply() {
    let awaiting: Vec<_> = mock_threads()
        .into_iter()
        .filter(|t| t.awaiting_reply())
        .map(|t| t.with_name)
        .collect();
    assert_eq!(awaiting, vec!["Terri"]);
}
