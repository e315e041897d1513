//! Process configuration from environment variables (after `.env` is loaded).

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub create_database: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("CONNECTION_STR"))
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "PORT", 5000)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 30)?),
            create_database: parse_or(&lookup, "CREATE_DATABASE", false)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply() {
        let s = settings(&[("DATABASE_URL", "postgres://localhost/todos")]).unwrap();
        assert_eq!(s.port, 5000);
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.max_connections, 5);
        assert_eq!(s.acquire_timeout, Duration::from_secs(30));
        assert!(!s.create_database);
    }

    #[test]
    fn connection_str_is_a_fallback() {
        let s = settings(&[("CONNECTION_STR", "postgres://db/app")]).unwrap();
        assert_eq!(s.database_url, "postgres://db/app");
        let s = settings(&[
            ("DATABASE_URL", "postgres://primary/app"),
            ("CONNECTION_STR", "postgres://db/app"),
        ])
        .unwrap();
        assert_eq!(s.database_url, "postgres://primary/app");
    }

    #[test]
    fn missing_url_is_an_error() {
        assert!(matches!(settings(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = settings(&[("DATABASE_URL", "postgres://x/y"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
        let err = settings(&[("DATABASE_URL", "postgres://x/y"), ("CREATE_DATABASE", "yes")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CREATE_DATABASE", .. }));
    }
}
