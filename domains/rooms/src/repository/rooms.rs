//! Room repository

use crate::domain::entities::{NewRoom, Room};
use chatrooms_common::Result;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct RoomRepository {
    pool: SqlitePool,
}

impl RoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find room by ID
    pub async fn find(&self, id: i64) -> Result<Option<Room>> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, chatbot_endpoint_url
            FROM rooms
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room)
    }

    /// List all rooms, oldest first
    pub async fn list(&self) -> Result<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, chatbot_endpoint_url
            FROM rooms
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    /// Create a new room
    pub async fn create(&self, room: &NewRoom) -> Result<Room> {
        let created = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (name, chatbot_endpoint_url)
            VALUES (?1, ?2)
            RETURNING id, name, chatbot_endpoint_url
            "#,
        )
        .bind(&room.name)
        .bind(&room.endpoint_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Overwrite the chatbot endpoint; `None` when the room does not exist
    pub async fn update_endpoint(&self, id: i64, endpoint_url: &str) -> Result<Option<Room>> {
        let updated = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms SET chatbot_endpoint_url = ?2
            WHERE id = ?1
            RETURNING id, name, chatbot_endpoint_url
            "#,
        )
        .bind(id)
        .bind(endpoint_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Rename a room; `None` when the room does not exist
    pub async fn rename(&self, id: i64, name: &str) -> Result<Option<Room>> {
        let updated = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms SET name = ?2
            WHERE id = ?1
            RETURNING id, name, chatbot_endpoint_url
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }
}
