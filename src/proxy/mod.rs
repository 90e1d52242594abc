// proxy module - maps API reverse proxy service

pub mod handlers; // API endpoint handlers
pub mod mappers; // Provider response mappers
pub mod middleware; // Axum middleware
pub mod server;
pub mod upstream; // Upstream client
pub mod validate; // Request validation

pub use server::{AppState, ProxyServer};
pub use upstream::client::UpstreamClient;
