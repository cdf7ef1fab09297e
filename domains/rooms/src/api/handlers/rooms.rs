//! Room management API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chatrooms_common::{not_blank, ApiPath, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::RoomsState;
use crate::domain::entities::Room;

/// Request for creating a room
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(custom(function = "not_blank", message = "Room name is required"))]
    pub name: String,

    /// Optional chatbot webhook
    #[validate(custom(function = "not_blank", message = "chatbot_endpoint_url cannot be empty"))]
    pub chatbot_endpoint_url: Option<String>,
}

/// Request for renaming a room
#[derive(Debug, Deserialize, Validate)]
pub struct RenameRoomRequest {
    #[validate(custom(function = "not_blank", message = "Room name is required"))]
    pub name: String,
}

/// Request for setting a room's chatbot endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct SetEndpointRequest {
    #[validate(custom(function = "not_blank", message = "chatbot_endpoint_url is required"))]
    pub chatbot_endpoint_url: String,
}

/// Room response DTO
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: i64,
    pub name: String,
    pub chatbot_endpoint_url: Option<String>,
}

impl From<Room> for RoomResponse {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            chatbot_endpoint_url: r.endpoint_url,
        }
    }
}

/// `{"room": ...}` envelope
#[derive(Debug, Serialize)]
pub struct RoomEnvelope {
    pub room: RoomResponse,
}

impl From<Room> for RoomEnvelope {
    fn from(r: Room) -> Self {
        Self { room: r.into() }
    }
}

/// `{"rooms": [...]}` envelope
#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomResponse>,
}

/// List all rooms
pub async fn list_rooms(State(state): State<RoomsState>) -> Result<Json<RoomListResponse>> {
    let rooms = state.service.list_rooms().await?;
    Ok(Json(RoomListResponse {
        rooms: rooms.into_iter().map(Into::into).collect(),
    }))
}

/// Create a new room
pub async fn create_room(
    State(state): State<RoomsState>,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomEnvelope>)> {
    let room = state
        .service
        .create_room(&req.name, req.chatbot_endpoint_url.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(room.into())))
}

/// Get a single room
pub async fn get_room(
    State(state): State<RoomsState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<RoomEnvelope>> {
    let room = state.service.get_room(id).await?;
    Ok(Json(room.into()))
}

/// Rename a room
pub async fn rename_room(
    State(state): State<RoomsState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<RenameRoomRequest>,
) -> Result<Json<RoomEnvelope>> {
    let room = state.service.rename_room(id, &req.name).await?;
    Ok(Json(room.into()))
}

/// Point a room at a chatbot endpoint
pub async fn set_endpoint(
    State(state): State<RoomsState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<SetEndpointRequest>,
) -> Result<Json<RoomEnvelope>> {
    let room = state
        .service
        .set_endpoint(id, &req.chatbot_endpoint_url)
        .await?;
    Ok(Json(room.into()))
}
