//! Web layer for the terminal finder.
//!
//! Provides HTTP endpoints for terminal search and name suggestions.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, TerminalSearch};
