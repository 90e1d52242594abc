// API endpoint handlers

pub mod imagery;
pub mod init;
pub mod route;

use crate::config::Config;
use crate::error::MapsError;

/// Key check shared by every provider-backed endpoint. The key never appears
/// in a client-visible message or URL; only its absence does.
pub fn require_api_key(config: &Config) -> Result<&str, MapsError> {
    config
        .api_key
        .as_deref()
        .ok_or_else(|| MapsError::Configuration("Maps API key not configured".to_string()))
}
