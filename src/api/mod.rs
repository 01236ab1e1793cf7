//! HTTP API module for the trip reports engine.
//!
//! This module exposes the report operations as JSON endpoints for the
//! dashboard's main and employee pages.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, EmployeeReport, MainReport};
pub use state::AppState;
