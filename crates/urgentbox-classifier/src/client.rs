//! Classifier HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::wire::{UrgencyRequest, UrgencyResponse};

/// Client for the urgency classification service.
///
/// Each call to [`classify`](Self::classify) issues exactly one request.
/// There is no retry; callers decide how to handle failure.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    endpoint: Endpoint,
    http_client: Client,
}

impl ClassifierClient {
    /// Creates a client using the transport's default timeouts.
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            http_client: Client::new(),
        }
    }

    /// Creates a client whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint,
            http_client,
        })
    }

    /// Returns the endpoint this client talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Asks the service for the urgency of a message.
    ///
    /// Returns the label exactly as the service sent it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or timeout, on a non-success
    /// status, or if the body is not `{"urgency": string}`.
    pub async fn classify(&self, subject: &str, body: &str) -> Result<String> {
        let request = UrgencyRequest {
            subject,
            message: body,
        };

        debug!(url = %self.endpoint.urgency_url, "Requesting urgency classification");

        let response = self
            .http_client
            .post(self.endpoint.urgency_url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        let parsed: UrgencyResponse = serde_json::from_slice(&bytes)?;

        debug!(urgency = %parsed.urgency, "Classifier responded");
        Ok(parsed.urgency)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Accepts one connection, answers with `response`, returns the raw request.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{addr}"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
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
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn client_for(base: &str) -> ClassifierClient {
        ClassifierClient::with_timeout(Endpoint::new(base).unwrap(), Duration::from_secs(5))
            .unwrap()
    }

    #[tokio::test]
    async fn test_classify_success() {
        let (base, server) = serve_once(http_response("200 OK", r#"{"urgency":"HIGH"}"#)).await;

        let urgency = client_for(&base)
            .classify("Server down", "Production is unreachable")
            .await
            .unwrap();
        assert_eq!(urgency, "HIGH");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /urgency/get HTTP/1.1"));
        let body = request.split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "subject": "Server down",
                "message": "Production is unreachable"
            })
        );
    }

    #[tokio::test]
    async fn test_classify_server_error() {
        let (base, _server) =
            serve_once(http_response("500 Internal Server Error", "model crashed")).await;

        let err = client_for(&base).classify("a", "b").await.unwrap_err();
        match err {
            Error::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "model crashed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_classify_malformed_body() {
        let (base, _server) = serve_once(http_response("200 OK", "<html>oops</html>")).await;

        let err = client_for(&base).classify("a", "b").await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_classify_missing_field() {
        let (base, _server) = serve_once(http_response("200 OK", r#"{"label":"low"}"#)).await;

        let err = client_for(&base).classify("a", "b").await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_classify_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{addr}"))
            .classify("a", "b")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_classify_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let _ = read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let client = ClassifierClient::with_timeout(
            Endpoint::new(format!("http://{addr}")).unwrap(),
            Duration::from_millis(200),
        )
        .unwrap();

        let err = client.classify("a", "b").await.unwrap_err();
        assert!(err.is_timeout());
    }
}
