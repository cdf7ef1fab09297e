//! Webhook relay implementation
//!
//! POSTs `{"messages": [...]}` to the room's configured endpoint using the
//! reqwest HTTP client and reads back a JSON array of messages.

use std::time::Duration;

use reqwest::Client;

use crate::{extract_reply, ChatbotRelay, RelayError, RelayReply, RelayRequest};

/// Longest slice of an error body kept for logging
const MAX_ERROR_BODY_LOG: usize = 512;

/// HTTP webhook relay
pub struct WebhookRelay {
    client: Client,
    timeout: Duration,
}

impl WebhookRelay {
    /// Create a relay whose requests are cut off after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout(self.timeout)
        } else {
            RelayError::Request(format!("HTTP request failed: {}", err))
        }
    }
}

#[async_trait::async_trait]
impl ChatbotRelay for WebhookRelay {
    async fn relay(
        &self,
        endpoint_url: &str,
        request: &RelayRequest,
    ) -> Result<RelayReply, RelayError> {
        tracing::debug!(
            endpoint = %endpoint_url,
            message_count = request.messages.len(),
            "Sending chatbot relay request"
        );

        let response = self
            .client
            .post(endpoint_url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            let snippet: String = error_body.chars().take(MAX_ERROR_BODY_LOG).collect();
            tracing::debug!(endpoint = %endpoint_url, status = %status, body = %snippet, "Chatbot endpoint error");
            return Err(RelayError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                RelayError::Timeout(self.timeout)
            } else {
                RelayError::Response(format!("Failed to parse response: {}", e))
            }
        })?;

        extract_reply(body)
    }
}
