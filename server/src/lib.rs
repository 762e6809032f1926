pub mod config;
pub mod employees;
pub mod http;

pub use http::{AppState, ServeConfig, build_router, serve};
