//! HTTP transport for the chat surface.

use async_trait::async_trait;
use thiserror::Error;

use crate::server::routes::{ChatReply, ChatRequest};

/// Failures while delivering a message to the responder endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never completed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Seam between the chat surface and whatever answers it.
#[async_trait]
pub trait ReplyTransport {
    /// Deliver a message and return the reply text.
    async fn send(&self, message: &str) -> Result<String, TransportError>;
}

/// Transport that posts to a running rulebot server.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpChatClient {
    /// Create a client for the server at `base_url` (no trailing slash).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ReplyTransport for HttpChatClient {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatReply = response.json().await?;
        Ok(reply.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HttpChatClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_status_error_display() {
        let err = TransportError::Status {
            status: 400,
            body: "bad request".to_string(),
        };
        assert_eq!(err.to_string(), "server returned 400: bad request");
    }
}
