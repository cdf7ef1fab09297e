//! Rooms domain: chat rooms, messages, chatbot webhook relay

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Message, NewMessage, NewRoom, Room, SenderType};
pub use domain::service::{ConversationService, SentMessages};

// Re-export repository types
pub use repository::{ConversationStore, MessageRepository, RoomRepository, RoomsRepositories};

// Re-export API types
pub use api::routes;
pub use api::RoomsState;
