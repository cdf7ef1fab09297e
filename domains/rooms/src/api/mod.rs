//! API layer for the Rooms domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::RoomsState;
pub use routes::routes;
