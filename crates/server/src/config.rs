use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" | "test" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    pub log_level: String,
    pub log_format: LogFormat,
    pub seed_sample_data: bool,
    /// Only set when `APP_ENV` explicitly names development.
    pub expose_error_detail: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3001,
            environment: Environment::Development,
            log_level: "info".into(),
            log_format: LogFormat::Pretty,
            seed_sample_data: true,
            expose_error_detail: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank keys
    /// fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = match get("HOST") {
            Some(v) => parse(&v, "HOST", "an IP address")?,
            None => defaults.host,
        };
        let port = match get("PORT") {
            Some(v) => parse(&v, "PORT", "a port number")?,
            None => defaults.port,
        };
        let (environment, expose_error_detail) = match get("APP_ENV") {
            Some(v) => {
                let env: Environment = parse(&v, "APP_ENV", "development or production")?;
                (env, env == Environment::Development)
            }
            None => (defaults.environment, defaults.expose_error_detail),
        };
        let log_level = get("LOG_LEVEL").unwrap_or(defaults.log_level);
        let log_format = match get("LOG_FORMAT") {
            Some(v) => parse(&v, "LOG_FORMAT", "pretty or json")?,
            None if environment.is_production() => LogFormat::Json,
            None => LogFormat::Pretty,
        };
        let seed_sample_data = match get("SEED_SAMPLE_DATA") {
            Some(v) => parse_bool(&v, "SEED_SAMPLE_DATA")?,
            None => defaults.seed_sample_data,
        };

        Ok(Self {
            host,
            port,
            environment,
            log_level,
            log_format,
            seed_sample_data,
            expose_error_detail,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: FromStr>(value: &str, key: &'static str, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        expected,
        value: value.to_string(),
    })
}

fn parse_bool(value: &str, key: &'static str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            expected: "a boolean",
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = from_pairs(&[]).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:3001");
    }

    #[test]
    fn reads_port_and_host() {
        let cfg = from_pairs(&[("PORT", "8088"), ("HOST", "127.0.0.1")]).unwrap();
        assert_eq!(cfg.listen_addr().to_string(), "127.0.0.1:8088");
    }

    #[test]
    fn production_defaults_to_json_logs() {
        let cfg = from_pairs(&[("APP_ENV", "production")]).unwrap();
        assert!(cfg.environment.is_production());
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn explicit_log_format_wins() {
        let cfg = from_pairs(&[("APP_ENV", "production"), ("LOG_FORMAT", "pretty")]).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = from_pairs(&[("PORT", "  "), ("LOG_LEVEL", "")]).unwrap();
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn error_detail_needs_explicit_development() {
        assert!(!from_pairs(&[]).unwrap().expose_error_detail);
        assert!(!from_pairs(&[("APP_ENV", "production")]).unwrap().expose_error_detail);
        assert!(from_pairs(&[("APP_ENV", "development")]).unwrap().expose_error_detail);
    }

    #[test]
    fn bad_port_rejected() {
        let err = from_pairs(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn bad_environment_rejected() {
        let err = from_pairs(&[("APP_ENV", "staging")]).unwrap_err();
        assert!(err.to_string().contains("APP_ENV"));
    }

    #[test]
    fn seed_flag_parsed() {
        let cfg = from_pairs(&[("SEED_SAMPLE_DATA", "false")]).unwrap();
        assert!(!cfg.seed_sample_data);
        assert!(from_pairs(&[("SEED_SAMPLE_DATA", "maybe")]).is_err());
    }
}
