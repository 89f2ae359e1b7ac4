use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ROSTER_BIND_ADDR '{value}' is not a socket address: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `ROSTER_DATA_DIR` and `ROSTER_BIND_ADDR`, falling back to the
    /// defaults for unset or empty variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = read("ROSTER_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                value: bind.clone(),
                source,
            })?;

        Ok(Self {
            data_dir: PathBuf::from(read("ROSTER_DATA_DIR", DEFAULT_DATA_DIR)),
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("ROSTER_DATA_DIR", "/var/lib/roster"),
            ("ROSTER_BIND_ADDR", "0.0.0.0:9000"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/roster"));
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn bad_address_is_an_error() {
        let err = Config::from_lookup(lookup(&[("ROSTER_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
