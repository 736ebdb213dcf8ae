//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHAT_UPSTREAM_URL: &str = "https://tartan-qa-system.onrender.com/chat";
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `CHAT_UPSTREAM_URL` is set but empty.
    #[error("CHAT_UPSTREAM_URL must not be empty")]
    EmptyUpstreamUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub url: String,
    pub timeouts: UpstreamTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub port: u16,
    pub upstream: UpstreamConfig,
    pub static_dir: PathBuf,
}

impl HubConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHAT_UPSTREAM_URL`: external QA service the `/api/chat` relay forwards to
    /// - `CHAT_UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `CHAT_UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    /// - `STATIC_DIR`: default `<crate>/static`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `PORT` does not parse or the upstream URL is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;

        let url = std::env::var("CHAT_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_CHAT_UPSTREAM_URL.to_owned());
        let url = url.trim().to_owned();
        if url.is_empty() {
            return Err(ConfigError::EmptyUpstreamUrl);
        }

        let timeouts = UpstreamTimeouts {
            request_secs: env_parse_u64("CHAT_UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CHAT_UPSTREAM_CONNECT_TIMEOUT_SECS", DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));

        Ok(Self { port, upstream: UpstreamConfig { url, timeouts }, static_dir })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
