//! HTTP API: catalog queries and form submission for the storefront front-end.

pub mod app;
pub mod config;
pub mod middleware;

pub use config::ApiConfig;
