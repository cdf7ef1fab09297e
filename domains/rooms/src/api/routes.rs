//! Route definitions for Rooms domain API

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{messages, rooms};
use super::middleware::RoomsState;

/// Create room routes
fn room_routes() -> Router<RoomsState> {
    Router::new()
        .route("/api/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/api/rooms/{id}",
            get(rooms::get_room).patch(rooms::rename_room),
        )
        .route("/api/rooms/{id}/endpoint", patch(rooms::set_endpoint))
}

/// Create message routes
fn message_routes() -> Router<RoomsState> {
    Router::new().route(
        "/api/rooms/{id}/messages",
        get(messages::list_messages).post(messages::send_message),
    )
}

/// Create all Rooms domain API routes
pub fn routes() -> Router<RoomsState> {
    Router::new().merge(room_routes()).merge(message_routes())
}
