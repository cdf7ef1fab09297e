//! Domain entities for the Rooms domain
//!
//! Rooms and messages as stored, plus the validated drafts the store turns
//! into rows. Ids and timestamps are always assigned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chatrooms_common::{is_blank, Error, Result};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    User,
    Assistant,
}

impl std::fmt::Display for SenderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderType::User => write!(f, "user"),
            SenderType::Assistant => write!(f, "assistant"),
        }
    }
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub name: String,
    /// Chatbot webhook; `None` means messages are never relayed
    #[sqlx(rename = "chatbot_endpoint_url")]
    pub endpoint_url: Option<String>,
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub room_id: i64,
    pub sender_type: SenderType,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Validated input for room creation
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub name: String,
    pub endpoint_url: Option<String>,
}

impl NewRoom {
    pub fn new(name: &str, endpoint_url: Option<&str>) -> Result<Self> {
        validate_name(name)?;
        if let Some(url) = endpoint_url {
            validate_endpoint_url(url)?;
        }

        Ok(NewRoom {
            name: name.to_string(),
            endpoint_url: endpoint_url.map(str::to_string),
        })
    }
}

/// Validated input for appending a message
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub room_id: i64,
    pub sender_type: SenderType,
    pub content: String,
}

impl NewMessage {
    /// Create a new user message draft
    pub fn user(room_id: i64, content: &str) -> Result<Self> {
        Self::new(room_id, SenderType::User, content)
    }

    /// Create a new assistant message draft
    pub fn assistant(room_id: i64, content: &str) -> Result<Self> {
        Self::new(room_id, SenderType::Assistant, content)
    }

    fn new(room_id: i64, sender_type: SenderType, content: &str) -> Result<Self> {
        if is_blank(content) {
            return Err(Error::InvalidArgument(
                "Message content cannot be empty or whitespace-only".to_string(),
            ));
        }

        Ok(NewMessage {
            room_id,
            sender_type,
            content: content.to_string(),
        })
    }
}

/// Room names must contain something besides whitespace
pub fn validate_name(name: &str) -> Result<()> {
    if is_blank(name) {
        return Err(Error::InvalidArgument("Room name is required".to_string()));
    }
    Ok(())
}

/// Endpoint URLs are opaque; only presence is checked
pub fn validate_endpoint_url(url: &str) -> Result<()> {
    if is_blank(url) {
        return Err(Error::InvalidArgument(
            "chatbot_endpoint_url cannot be empty".to_string(),
        ));
    }
    Ok(())
}
