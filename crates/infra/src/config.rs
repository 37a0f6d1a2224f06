//! Runtime configuration, read from the process environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_DIRECTORY_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub directory_url: String,
    pub directory_timeout: Duration,
    /// Load the default people into the store at startup.
    pub seed: bool,
}

impl Config {
    /// Read `PHONEBOOK_*` variables from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as `from_env`, with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("PHONEBOOK_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|e| ConfigError::Invalid {
            var: "PHONEBOOK_BIND_ADDR",
            reason: format!("{e}"),
        })?;

        let directory_url = lookup("PHONEBOOK_DIRECTORY_URL")
            .unwrap_or_else(|| DEFAULT_DIRECTORY_URL.to_string());
        if directory_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "PHONEBOOK_DIRECTORY_URL",
                reason: "must not be empty".to_string(),
            });
        }

        let directory_timeout = match lookup("PHONEBOOK_DIRECTORY_TIMEOUT_MS") {
            Some(v) => v.parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "PHONEBOOK_DIRECTORY_TIMEOUT_MS",
                reason: format!("{e}"),
            })?,
            None => DEFAULT_DIRECTORY_TIMEOUT_MS,
        };
        if directory_timeout == 0 {
            return Err(ConfigError::Invalid {
                var: "PHONEBOOK_DIRECTORY_TIMEOUT_MS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let seed = match lookup("PHONEBOOK_SEED") {
            Some(v) => parse_bool(&v).ok_or_else(|| ConfigError::Invalid {
                var: "PHONEBOOK_SEED",
                reason: format!("expected true/false, got {v:?}"),
            })?,
            None => true,
        };

        Ok(Self {
            bind_addr,
            directory_url,
            directory_timeout: Duration::from_millis(directory_timeout),
            seed,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            directory_timeout: Duration::from_millis(DEFAULT_DIRECTORY_TIMEOUT_MS),
            seed: true,
        }
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        assert_eq!(from_map(&[]).unwrap(), Config::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = from_map(&[
            ("PHONEBOOK_BIND_ADDR", "127.0.0.1:9000"),
            ("PHONEBOOK_DIRECTORY_URL", "http://localhost:1234/users"),
            ("PHONEBOOK_DIRECTORY_TIMEOUT_MS", "250"),
            ("PHONEBOOK_SEED", "off"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cfg.directory_url, "http://localhost:1234/users");
        assert_eq!(cfg.directory_timeout, Duration::from_millis(250));
        assert!(!cfg.seed);
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = from_map(&[("PHONEBOOK_DIRECTORY_TIMEOUT_MS", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { var: "PHONEBOOK_DIRECTORY_TIMEOUT_MS", .. }
        ));

        let err = from_map(&[("PHONEBOOK_SEED", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PHONEBOOK_SEED", .. }));

        let err = from_map(&[("PHONEBOOK_BIND_ADDR", "nowhere")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PHONEBOOK_BIND_ADDR", .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(from_map(&[("PHONEBOOK_DIRECTORY_TIMEOUT_MS", "0")]).is_err());
    }
}
