//! Chatbot relay
//!
//! Forwards a room's message history to an external chatbot webhook and
//! extracts the assistant's reply from whatever comes back. A relay call is
//! a single best-effort attempt: no retries, bounded by a timeout.

pub mod mock;
pub mod webhook;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use mock::MockRelay;
#[cfg(any(test, feature = "test-support"))]
pub use mock::ScriptedRelay;
pub use webhook::WebhookRelay;

/// Default upper bound for one webhook exchange
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Speaker of a relayed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayRole {
    User,
    Assistant,
}

/// One `{role, content}` pair of the outbound payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMessage {
    pub role: RelayRole,
    pub content: String,
}

/// Outbound request body: `{"messages": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub messages: Vec<RelayMessage>,
}

/// Reply text extracted from the chatbot's response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub content: String,
}

/// Anything that went wrong reaching or interpreting the chatbot
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Relay request failed: {0}")]
    Request(String),

    #[error("Relay timed out after {0:?}")]
    Timeout(Duration),

    #[error("Chatbot endpoint returned status {0}")]
    Status(u16),

    #[error("Malformed chatbot response: {0}")]
    Response(String),

    #[error("Chatbot response contained no reply")]
    EmptyReply,

    #[error("Relay configuration error: {0}")]
    Config(String),
}

/// Relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// "webhook" (default) or "mock"
    pub provider: String,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            provider: "webhook".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Outbound call to an external chatbot
#[async_trait::async_trait]
pub trait ChatbotRelay: Send + Sync {
    /// Send `request` to `endpoint_url` and return the extracted reply
    async fn relay(&self, endpoint_url: &str, request: &RelayRequest)
        -> Result<RelayReply, RelayError>;
}

/// Builds the configured relay implementation
pub struct RelayServiceFactory;

impl RelayServiceFactory {
    pub fn create(config: RelayConfig) -> Result<Box<dyn ChatbotRelay>, RelayError> {
        match config.provider.as_str() {
            "webhook" => Ok(Box::new(WebhookRelay::new(config.timeout)?)),
            "mock" => Ok(Box::new(MockRelay::new())),
            other => Err(RelayError::Config(format!(
                "unknown relay provider: {}",
                other
            ))),
        }
    }
}

/// Pull the reply out of a chatbot response body.
///
/// The body must be a JSON array; the `content` string of its last element is
/// the reply. Anything else (not an array, empty, last element without a
/// non-blank textual `content`) is rejected.
pub fn extract_reply(body: serde_json::Value) -> Result<RelayReply, RelayError> {
    let serde_json::Value::Array(items) = body else {
        return Err(RelayError::Response(
            "expected a JSON array of messages".to_string(),
        ));
    };

    let last = items.last().ok_or(RelayError::EmptyReply)?;

    let content = last
        .get("content")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| {
            RelayError::Response("last element has no textual content".to_string())
        })?;

    if content.trim().is_empty() {
        return Err(RelayError::EmptyReply);
    }

    Ok(RelayReply {
        content: content.to_string(),
    })
}
