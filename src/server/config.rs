use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the HTTP server binds to when `HOLOCRON_ADDRESS` is unset.
pub const DEFAULT_ADDRESS: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

pub struct Config {
    pub database_url: String,
    pub address: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let address = match lookup("HOLOCRON_ADDRESS") {
            Some(value) => value
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::invalid("HOLOCRON_ADDRESS", e))?,
            None => SocketAddr::from(DEFAULT_ADDRESS),
        };

        Ok(Self {
            database_url,
            address,
        })
    }
}
