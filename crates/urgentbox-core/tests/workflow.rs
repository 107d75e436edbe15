//! End-to-end submission tests against a local classifier.
//!
//! A one-shot HTTP server on `127.0.0.1` stands in for the classifier
//! service, so these exercise the real HTTP client.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use urgentbox_classifier::{ClassifierClient, Endpoint};
use urgentbox_core::{Composer, DraftField, Inbox, SubmitError, Urgency, UrgencyTab};

/// How the fake classifier behaves for its single connection.
enum Reply {
    /// Answer with this status line and body.
    Respond(&'static str, &'static str),
    /// Read the request and never answer.
    Stall,
}

async fn fake_classifier(reply: Reply) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + len {
                    break;
                }
            }
        }

        match reply {
            Reply::Respond(status, body) => {
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
            Reply::Stall => {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
        }
    });

    format!("http://{addr}")
}

fn client(base: &str, timeout: Duration) -> ClassifierClient {
    ClassifierClient::with_timeout(Endpoint::new(base).unwrap(), timeout).unwrap()
}

fn jane() -> Composer {
    let mut composer = Composer::new();
    composer.update(DraftField::Name, "Jane");
    composer.update(DraftField::SenderAddress, "jane@x.com");
    composer.update(DraftField::Subject, "Help");
    composer.update(DraftField::Body, "Need assistance");
    composer
}

#[tokio::test]
async fn test_jane_low_urgency() {
    let base = fake_classifier(Reply::Respond("200 OK", r#"{"urgency":"Low"}"#)).await;
    let classifier = client(&base, Duration::from_secs(5));
    let mut inbox = Inbox::new();
    let mut composer = jane();

    let id = composer.submit(&classifier, &mut inbox).await.unwrap();

    let message = inbox.all().next().unwrap();
    assert_eq!(message.id(), id);
    assert_eq!(message.sender(), "Jane");
    assert_eq!(message.recipient(), "jane@x.com");
    assert_eq!(message.subject(), "Help");
    assert_eq!(message.body(), "Need assistance");
    assert_eq!(message.urgency(), &Urgency::Low);
    assert!(composer.draft().is_empty());
}

#[tokio::test]
async fn test_uppercase_label_is_folded() {
    let base = fake_classifier(Reply::Respond("200 OK", r#"{"urgency":"HIGH"}"#)).await;
    let classifier = client(&base, Duration::from_secs(5));
    let mut inbox = Inbox::new();

    jane().submit(&classifier, &mut inbox).await.unwrap();

    assert_eq!(inbox.view(UrgencyTab::High).len(), 1);
}

#[tokio::test]
async fn test_server_error_falls_back_to_unknown() {
    let base = fake_classifier(Reply::Respond("500 Internal Server Error", "")).await;
    let classifier = client(&base, Duration::from_secs(5));
    let mut inbox = Inbox::new();

    let result = jane().submit(&classifier, &mut inbox).await;

    assert!(result.is_ok());
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox.all().next().unwrap().urgency(), &Urgency::Unknown);
}

#[tokio::test]
async fn test_malformed_body_falls_back_to_unknown() {
    let base = fake_classifier(Reply::Respond("200 OK", "not json")).await;
    let classifier = client(&base, Duration::from_secs(5));
    let mut inbox = Inbox::new();

    jane().submit(&classifier, &mut inbox).await.unwrap();

    assert_eq!(inbox.view(UrgencyTab::Unknown).len(), 1);
}

#[tokio::test]
async fn test_timeout_falls_back_to_unknown() {
    let base = fake_classifier(Reply::Stall).await;
    let classifier = client(&base, Duration::from_millis(200));
    let mut inbox = Inbox::new();
    let mut composer = jane();

    let result = composer.submit(&classifier, &mut inbox).await;

    assert!(result.is_ok());
    assert_eq!(inbox.all().next().unwrap().urgency(), &Urgency::Unknown);
    assert!(composer.draft().is_empty());
    assert!(!composer.is_submitting());
}

#[tokio::test]
async fn test_unreachable_classifier_falls_back_to_unknown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let classifier = client(&format!("http://{addr}"), Duration::from_secs(5));
    let mut inbox = Inbox::new();

    jane().submit(&classifier, &mut inbox).await.unwrap();

    assert_eq!(inbox.all().next().unwrap().urgency(), &Urgency::Unknown);
}

#[tokio::test]
async fn test_rejected_draft_never_reaches_classifier() {
    // Nothing listens here; a request would fail, but none should be made.
    let classifier = client("http://127.0.0.1:9", Duration::from_millis(200));
    let mut inbox = Inbox::new();
    let mut composer = jane();
    composer.update(DraftField::Name, "");

    let err = composer.submit(&classifier, &mut inbox).await.unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(_)));
    assert!(inbox.is_empty());
    assert_eq!(composer.draft().subject, "Help");
}
