use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::error::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub app_env: String,
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "*")
        .map(str::to_string)
        .collect()
}

fn parse_log_format(raw: &str) -> LogFormat {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" => LogFormat::Pretty,
        _ => LogFormat::Json,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or_parse("PORT", 8000),
            app_env: env_or("APP_ENV", "development"),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "*")),
            log_format: parse_log_format(&env_or("LOG_FORMAT", "json")),
        }
    }

    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            app_env: "test".to_string(),
            cors_origins: Vec::new(),
            log_format: LogFormat::Pretty,
        }
    }

    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| AppError::Internal(format!("invalid HOST {:?}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_origins_mean_any() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins(" , ").is_empty());
        assert_eq!(
            parse_origins("http://localhost:3000, https://galera.app"),
            vec!["http://localhost:3000", "https://galera.app"]
        );
    }

    #[test]
    fn log_format_defaults_to_json() {
        assert_eq!(parse_log_format("PRETTY"), LogFormat::Pretty);
        assert_eq!(parse_log_format("json"), LogFormat::Json);
        assert_eq!(parse_log_format("yaml"), LogFormat::Json);
    }

    #[test]
    fn bind_addr_rejects_bad_host() {
        let mut config = Config::for_tests();
        config.port = 8080;
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");

        config.host = "not-an-ip".into();
        assert!(matches!(config.bind_addr(), Err(AppError::Internal(_))));
    }
}
