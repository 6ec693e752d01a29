//! Web layer for the metro route server.
//!
//! Provides JSON endpoints for listing lines and stations, finding routes
//! and searching stations by name.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
