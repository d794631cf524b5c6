//! Bingo Card HTTP Gateway
//!
//! Exposes the card store from `bingo-core` as a small JSON API, with
//! permissive CORS and optional static serving of the frontend.
//!
//! ## Module Structure
//!
//! - `config` - Command-line arguments and resolved server configuration
//! - `handlers` - Card endpoints and error-to-status mapping
//! - `service` - Shared state, router assembly, middleware
//! - `assets` - Static frontend files

mod assets;
pub mod config;
pub mod handlers;
pub mod service;

pub use config::{Args, ServerConfig};
pub use handlers::{ApiError, SERVICE_NAME};
pub use service::{build_router, AppState};
