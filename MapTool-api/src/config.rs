//! Process configuration, read once at startup

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

/// Service title published in the API documentation
pub const SERVICE_TITLE: &str = "Mean Arterial Pressure (MAP) Tool";

/// Service description published in the API documentation
pub const SERVICE_DESCRIPTION: &str =
    "API for calculating Mean Arterial Pressure based on Systolic and Diastolic Blood Pressure.";

/// Service version, taken from the Cargo manifest
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PORT is not a valid TCP port number
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// HOST is not a valid IP address
    #[error("Invalid HOST value '{value}': {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Immutable application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind (HOST, default 0.0.0.0)
    pub host: IpAddr,

    /// Port to bind (PORT, default 3000)
    pub port: u16,

    /// Serve Swagger UI and the OpenAPI document (ENABLE_DOCS, default off)
    pub enable_docs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            enable_docs: false,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let enable_docs = lookup("ENABLE_DOCS")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(defaults.enable_docs);

        Ok(Self {
            host,
            port,
            enable_docs,
        })
    }

    /// Socket address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
