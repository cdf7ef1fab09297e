//! Repository implementations for the Rooms domain

pub mod messages;
pub mod rooms;

use sqlx::SqlitePool;

use crate::domain::entities::{Message, NewMessage, NewRoom, Room};
use chatrooms_common::Result;

pub use messages::MessageRepository;
pub use rooms::RoomRepository;

/// Durable storage for rooms and messages.
///
/// Each mutation is a single atomic insert or update. Implementations must
/// hand out unique, increasing message ids per insert and report an unknown
/// room on `append_message` as `Error::RoomNotFound`.
#[async_trait::async_trait]
pub trait ConversationStore: Send + Sync {
    async fn create_room(&self, room: &NewRoom) -> Result<Room>;

    async fn list_rooms(&self) -> Result<Vec<Room>>;

    async fn get_room(&self, id: i64) -> Result<Option<Room>>;

    /// Last write wins
    async fn set_endpoint(&self, id: i64, endpoint_url: &str) -> Result<Option<Room>>;

    async fn rename_room(&self, id: i64, name: &str) -> Result<Option<Room>>;

    /// Ordered by (timestamp, id); empty when the room has no messages
    async fn list_messages(&self, room_id: i64) -> Result<Vec<Message>>;

    async fn append_message(&self, message: &NewMessage) -> Result<Message>;
}

/// Combined repository access for the Rooms domain
#[derive(Clone)]
pub struct RoomsRepositories {
    pool: SqlitePool,
    pub rooms: RoomRepository,
    pub messages: MessageRepository,
}

impl RoomsRepositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            rooms: RoomRepository::new(pool.clone()),
            messages: MessageRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl ConversationStore for RoomsRepositories {
    async fn create_room(&self, room: &NewRoom) -> Result<Room> {
        self.rooms.create(room).await
    }

    async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.rooms.list().await
    }

    async fn get_room(&self, id: i64) -> Result<Option<Room>> {
        self.rooms.find(id).await
    }

    async fn set_endpoint(&self, id: i64, endpoint_url: &str) -> Result<Option<Room>> {
        self.rooms.update_endpoint(id, endpoint_url).await
    }

    async fn rename_room(&self, id: i64, name: &str) -> Result<Option<Room>> {
        self.rooms.rename(id, name).await
    }

    async fn list_messages(&self, room_id: i64) -> Result<Vec<Message>> {
        self.messages.list_by_room(room_id).await
    }

    async fn append_message(&self, message: &NewMessage) -> Result<Message> {
        self.messages.create(message).await
    }
}
