//! Shared configuration, database access, and error handling for Chatrooms
//!
//! This crate provides common functionality used across the Chatrooms application:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - SQLite pool setup with embedded migrations
//! - Request extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use error::{Error, Result};
pub use extractors::{is_blank, not_blank, ApiPath, ValidatedJson};
