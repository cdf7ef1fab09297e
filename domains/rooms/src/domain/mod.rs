//! Rooms domain layer: entities and conversation orchestration

pub mod entities;
pub mod service;
