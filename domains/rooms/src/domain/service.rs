//! Conversation service
//!
//! Owns the room and message lifecycle and the relay to external chatbot
//! endpoints. Every operation is one sequential pipeline; the only suspension
//! points are store calls and the single outbound relay call.

use std::sync::Arc;

use chatrooms_common::{Error, Result};
use chatrooms_relay::{ChatbotRelay, RelayError, RelayMessage, RelayRequest, RelayRole};

use crate::domain::entities::{
    validate_endpoint_url, validate_name, Message, NewMessage, NewRoom, Room, SenderType,
};
use crate::repository::ConversationStore;

/// Result of sending a user message
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessages {
    pub user_message: Message,
    /// Present only when the room has an endpoint and the relay succeeded
    pub assistant_message: Option<Message>,
}

/// Why a relay produced no assistant message
#[derive(Debug, thiserror::Error)]
enum RelayFailure {
    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error(transparent)]
    Store(#[from] Error),
}

#[derive(Clone)]
pub struct ConversationService {
    store: Arc<dyn ConversationStore>,
    relay: Arc<dyn ChatbotRelay>,
}

impl ConversationService {
    pub fn new(store: Arc<dyn ConversationStore>, relay: Arc<dyn ChatbotRelay>) -> Self {
        Self { store, relay }
    }

    pub async fn create_room(&self, name: &str, endpoint_url: Option<&str>) -> Result<Room> {
        let draft = NewRoom::new(name, endpoint_url)?;
        let room = self.store.create_room(&draft).await?;

        tracing::info!(room_id = room.id, has_endpoint = room.endpoint_url.is_some(), "Room created");
        Ok(room)
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.store.list_rooms().await
    }

    pub async fn get_room(&self, room_id: i64) -> Result<Room> {
        self.store
            .get_room(room_id)
            .await?
            .ok_or(Error::RoomNotFound(room_id))
    }

    pub async fn rename_room(&self, room_id: i64, name: &str) -> Result<Room> {
        validate_name(name)?;
        self.store
            .rename_room(room_id, name)
            .await?
            .ok_or(Error::RoomNotFound(room_id))
    }

    pub async fn set_endpoint(&self, room_id: i64, endpoint_url: &str) -> Result<Room> {
        validate_endpoint_url(endpoint_url)?;
        let room = self
            .store
            .set_endpoint(room_id, endpoint_url)
            .await?
            .ok_or(Error::RoomNotFound(room_id))?;

        tracing::info!(room_id, "Chatbot endpoint updated");
        Ok(room)
    }

    pub async fn list_messages(&self, room_id: i64) -> Result<Vec<Message>> {
        self.get_room(room_id).await?;
        self.store.list_messages(room_id).await
    }

    /// Persist a user message, then relay the room to its chatbot if one is set.
    ///
    /// Only validation and the user-message insert can fail this call. Once
    /// the user message is stored, relay problems (transport, timeout, bad
    /// response, or storage errors while relaying) are logged and leave
    /// `assistant_message` empty.
    ///
    /// Concurrent sends to the same room are not serialized: each relays the
    /// history it reads, which may miss a sibling message appended a moment
    /// later.
    pub async fn send_user_message(&self, room_id: i64, content: &str) -> Result<SentMessages> {
        self.get_room(room_id).await?;
        let draft = NewMessage::user(room_id, content)?;

        let user_message = self.store.append_message(&draft).await?;
        tracing::debug!(room_id, message_id = user_message.id, "User message stored");

        let endpoint_url = match self.store.get_room(room_id).await {
            Ok(Some(room)) => room.endpoint_url,
            Ok(None) => None,
            Err(e) => {
                tracing::error!(room_id, error = %e, "Failed to reload room; skipping relay");
                None
            }
        };

        let assistant_message = match endpoint_url {
            Some(url) => self.relay_room(room_id, &url).await,
            None => None,
        };

        Ok(SentMessages {
            user_message,
            assistant_message,
        })
    }

    async fn relay_room(&self, room_id: i64, endpoint_url: &str) -> Option<Message> {
        match self.try_relay(room_id, endpoint_url).await {
            Ok(message) => {
                tracing::info!(room_id, message_id = message.id, "Chatbot reply stored");
                Some(message)
            }
            Err(RelayFailure::Relay(e)) => {
                tracing::warn!(room_id, endpoint = %endpoint_url, error = %e, "Chatbot relay failed");
                None
            }
            Err(RelayFailure::Store(e)) => {
                tracing::error!(room_id, error = %e, "Storage error during chatbot relay");
                None
            }
        }
    }

    async fn try_relay(
        &self,
        room_id: i64,
        endpoint_url: &str,
    ) -> std::result::Result<Message, RelayFailure> {
        // Read fresh so the message just stored is part of the payload
        let history = self.store.list_messages(room_id).await?;

        let request = RelayRequest {
            messages: history
                .iter()
                .map(|m| RelayMessage {
                    role: match m.sender_type {
                        SenderType::User => RelayRole::User,
                        SenderType::Assistant => RelayRole::Assistant,
                    },
                    content: m.content.clone(),
                })
                .collect(),
        };

        let reply = self.relay.relay(endpoint_url, &request).await?;

        let draft =
            NewMessage::assistant(room_id, &reply.content).map_err(|_| RelayError::EmptyReply)?;
        Ok(self.store.append_message(&draft).await?)
    }
}
