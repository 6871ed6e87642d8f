//! Web layer for the flight search server.
//!
//! Provides HTTP endpoints for searching flights and pricing them by fare
//! category.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
