//! Message API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chatrooms_common::{ApiPath, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::RoomsState;
use crate::domain::entities::{Message, SenderType};

/// Request for sending a message
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// Message content; blank content is rejected by the service after the room lookup
    pub content: String,
}

/// Message response DTO
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub room_id: i64,
    pub sender_type: SenderType,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            room_id: m.room_id,
            sender_type: m.sender_type,
            content: m.content,
            timestamp: m.timestamp,
        }
    }
}

/// `{"messages": [...]}` envelope
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
}

/// Response for send message; `assistant_message` is null when nothing was relayed
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub user_message: MessageResponse,
    pub assistant_message: Option<MessageResponse>,
}

/// Send a user message, relaying to the room's chatbot when one is configured
pub async fn send_message(
    State(state): State<RoomsState>,
    ApiPath(room_id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>)> {
    let sent = state
        .service
        .send_user_message(room_id, &req.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            user_message: sent.user_message.into(),
            assistant_message: sent.assistant_message.map(Into::into),
        }),
    ))
}

/// List messages for a room
pub async fn list_messages(
    State(state): State<RoomsState>,
    ApiPath(room_id): ApiPath<i64>,
) -> Result<Json<MessageListResponse>> {
    let messages = state.service.list_messages(room_id).await?;

    Ok(Json(MessageListResponse {
        messages: messages.into_iter().map(Into::into).collect(),
    }))
}
