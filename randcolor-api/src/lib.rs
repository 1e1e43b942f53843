//! # randcolor-api
//!
//! REST API server for the randcolor library
//!

mod api;
pub mod config;

pub use api::{app, describe_color, health_check, random_color, AppError, ErrorResponse};
pub use config::ServerConfig;
