//! Message repository

use crate::domain::entities::{Message, NewMessage};
use chatrooms_common::{Error, Result};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List messages for a room, ordered by (timestamp, id) ASC
    pub async fn list_by_room(&self, room_id: i64) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, room_id, sender_type, content, timestamp
            FROM messages
            WHERE room_id = ?1
            ORDER BY timestamp ASC, id ASC
            "#,
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Append a message, stamping it with the current time.
    ///
    /// The stamp never falls below the room's latest timestamp, so a clock
    /// stepping backwards cannot reorder a room's history.
    pub async fn create(&self, msg: &NewMessage) -> Result<Message> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (room_id, sender_type, content, timestamp)
            VALUES (
                ?1, ?2, ?3,
                MAX(
                    strftime('%Y-%m-%dT%H:%M:%fZ', 'now'),
                    COALESCE((SELECT MAX(timestamp) FROM messages WHERE room_id = ?1), '')
                )
            )
            RETURNING id, room_id, sender_type, content, timestamp
            "#,
        )
        .bind(msg.room_id)
        .bind(msg.sender_type)
        .bind(&msg.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Error::RoomNotFound(msg.room_id)
            }
            _ => Error::Database(e),
        })?;

        Ok(created)
    }
}
