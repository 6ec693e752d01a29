//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tracing::warn;

use crate::network::EXCLUDED_PREFIX;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8082;

/// Default directory holding the line files.
pub const DEFAULT_LINES_DIR: &str = "lines";

/// Configuration for the metro server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory containing one JSON file per line.
    pub lines_dir: PathBuf,

    /// Files in `lines_dir` starting with this prefix are not lines.
    pub excluded_prefix: String,

    /// Address to bind the HTTP listener to.
    pub bind: IpAddr,

    /// Port to bind the HTTP listener to.
    pub port: u16,
}

impl ServerConfig {
    /// Create a config reading lines from `lines_dir`, with default networking.
    pub fn new(lines_dir: impl Into<PathBuf>) -> Self {
        Self {
            lines_dir: lines_dir.into(),
            ..Self::default()
        }
    }

    /// Build configuration from environment variables.
    ///
    /// - `METRO_LINES_DIR`: line data directory (default `lines`)
    /// - `METRO_BIND`: bind address (default `0.0.0.0`)
    /// - `METRO_PORT`: port (default 8082)
    ///
    /// Unparsable values are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("METRO_LINES_DIR") {
            config.lines_dir = PathBuf::from(dir);
        }

        if let Some(bind) = lookup("METRO_BIND") {
            match bind.parse() {
                Ok(addr) => config.bind = addr,
                Err(e) => warn!(value = %bind, error = %e, "ignoring invalid METRO_BIND"),
            }
        }

        if let Some(port) = lookup("METRO_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(e) => warn!(value = %port, error = %e, "ignoring invalid METRO_PORT"),
            }
        }

        config
    }

    /// Set a custom port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            lines_dir: PathBuf::from(DEFAULT_LINES_DIR),
            excluded_prefix: EXCLUDED_PREFIX.to_string(),
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}
