//! Connection configuration for a humidifier
//!
//! Discovery is left to the host application; a configuration names the
//! device address directly.

use std::time::Duration;

use wemo_api::DEFAULT_PORT;

use crate::error::{HumidifierError, Result};

/// Environment variable holding the device host name or IP address
pub const ENV_HOST: &str = "WEMO_HOST";
/// Environment variable overriding the device port
pub const ENV_PORT: &str = "WEMO_PORT";
/// Environment variable overriding the display name
pub const ENV_NAME: &str = "WEMO_NAME";

/// Configuration for connecting to a humidifier
#[derive(Debug, Clone, PartialEq)]
pub struct HumidifierConfig {
    /// Device host name or IP address
    pub host: String,

    /// UPnP port of the device
    /// Default: 49153
    pub port: u16,

    /// Display name
    /// Default: "Humidifier"
    pub name: String,

    /// TCP connect timeout for SOAP calls
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Read timeout for SOAP calls
    /// Default: 10 seconds
    pub read_timeout: Duration,
}

impl Default for HumidifierConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            name: "Humidifier".to_string(),
            connect_timeout: soap_client::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: soap_client::DEFAULT_READ_TIMEOUT,
        }
    }
}

impl HumidifierConfig {
    /// Create a configuration for the device at `host` with default settings
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Read the configuration from `WEMO_HOST`, `WEMO_PORT` and `WEMO_NAME`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup(ENV_HOST)
            .filter(|host| !host.trim().is_empty())
            .ok_or_else(|| HumidifierError::Config(format!("{} is not set", ENV_HOST)))?;

        let mut config = Self::new(host.trim());

        if let Some(port) = lookup(ENV_PORT) {
            config.port = port.trim().parse().map_err(|_| {
                HumidifierError::Config(format!("{} is not a valid port: {}", ENV_PORT, port))
            })?;
        }

        if let Some(name) = lookup(ENV_NAME) {
            config.name = name;
        }

        Ok(config)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}
