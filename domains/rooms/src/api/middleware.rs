//! Rooms domain state

use crate::domain::service::ConversationService;

/// Application state for the Rooms domain
#[derive(Clone)]
pub struct RoomsState {
    pub service: ConversationService,
}
