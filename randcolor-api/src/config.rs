//! Server configuration read from the environment.

use anyhow::{Context, Result};

pub const HOST_VAR: &str = "RANDCOLOR_HOST";
pub const PORT_VAR: &str = "RANDCOLOR_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Where the API server listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `RANDCOLOR_HOST` and `RANDCOLOR_PORT`, falling back to defaults
    /// for unset variables. A port that is set but not a valid `u16` is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} must be a port number, got '{port}'"))?;
        }

        Ok(config)
    }

    /// `host:port`, resolved by the listener so host names work too.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
