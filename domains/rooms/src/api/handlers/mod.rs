//! HTTP handlers for the Rooms domain

pub mod messages;
pub mod rooms;
