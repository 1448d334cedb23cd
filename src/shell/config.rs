// Runtime configuration read from the environment.
//
// A `.env` file in the working directory is loaded first when present;
// variables already set in the process environment win.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "MEAL_JOURNAL_HOST";
pub const PORT_VAR: &str = "MEAL_JOURNAL_PORT";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILTER: &str = "meal_journal=info,tower_http=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid MEAL_JOURNAL_PORT value: {0}")]
    InvalidPort(String),

    #[error("invalid MEAL_JOURNAL_HOST value: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup(HOST_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            host,
            port,
            log_filter,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
