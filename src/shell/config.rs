// Startup configuration read from the process environment.
//
// Responsibilities
// - Resolve the listen address and the optional appointment seed file.
// - Reject malformed values before anything is bound.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "CLINIC_HOST";
pub const PORT_VAR: &str = "CLINIC_PORT";
pub const SEED_PATH_VAR: &str = "CLINIC_SEED_PATH";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let host_raw = read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value: host_raw.clone(),
            })?;

        let port = match read(PORT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            seed_path: read(SEED_PATH_VAR).map(PathBuf::from),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
