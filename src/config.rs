use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

const DEFAULT_PORT: u16 = 8090;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PLACEHOLDER_URL: &str = "/images/map-placeholder.png";

/// Process-wide configuration, read once from the environment at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mapping provider API key. Absent is not a startup failure; endpoints
    /// that need it fail per-request with a configuration error instead.
    pub api_key: Option<String>,

    /// Listen port
    pub port: u16,

    /// Whether to allow LAN access
    /// - false: bind 127.0.0.1 only (default)
    /// - true: bind 0.0.0.0
    pub allow_lan_access: bool,

    /// Timeout for outbound provider requests (seconds)
    pub upstream_timeout_secs: u64,

    /// Where the static-map endpoint redirects when it cannot produce an image
    pub placeholder_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: optional_env("MAPS_API_KEY"),
            port: parsed_env("MAPS_PROXY_PORT", DEFAULT_PORT),
            allow_lan_access: parsed_env("MAPS_PROXY_ALLOW_LAN", false),
            upstream_timeout_secs: parsed_env(
                "MAPS_UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            ),
            placeholder_url: optional_env("MAPS_PLACEHOLDER_URL")
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_URL.to_string()),
        }
    }

    /// Actual listen address
    pub fn bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }

    /// Log the resolved configuration. The key itself is never written out.
    pub fn log(&self) {
        info!("Listen address: {}:{}", self.bind_address(), self.port);
        info!("Upstream timeout: {}s", self.upstream_timeout_secs);
        info!("Placeholder URL: {}", self.placeholder_url);
        match self.api_key {
            Some(_) => info!("Maps API key: configured"),
            None => warn!(
                "MAPS_API_KEY not set; route, static and tile endpoints will fail until it is"
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            port: DEFAULT_PORT,
            allow_lan_access: false,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
        }
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parsed_env<T: FromStr>(name: &str, default: T) -> T
where
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {name} value ({e}), using default");
            default
        }),
        Err(_) => default,
    }
}
