//! Beacon: a tiny info and liveness HTTP service.
//!
//! `GET /info` answers with a greeting naming the service owner and
//! `GET /health` reports status, process uptime and the current time.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod state;
pub mod uptime;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
