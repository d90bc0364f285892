//! HTTP API module for the Receipt Calculation Engine.
//!
//! This module provides the REST API endpoint for computing receipts
//! from purchase lines.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReceiptRequest;
pub use response::ApiError;
pub use state::AppState;
