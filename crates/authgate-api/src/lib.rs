//! # authgate-api
//!
//! The HTTP surface of AuthGate: router, request gate middleware, DTOs,
//! and handlers mapping the service layer onto `/api/v1`.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
