/*
 * Responsibility
 * - Load settings from the environment (.env first): port, CORS allowlist, token key, TTLs
 * - Validate values up front (missing or unparsable -> startup failure)
 * - Key length itself is enforced by the token maker at construction
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration as StdDuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // Symmetric key for access tokens (exactly 32 bytes)
    pub token_symmetric_key: String,
    pub access_token_ttl: chrono::Duration,

    pub request_timeout: StdDuration,
    pub request_body_limit_bytes: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("request_timeout", &self.request_timeout)
            .field("request_body_limit_bytes", &self.request_body_limit_bytes)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or("PORT", get("PORT"), 3000)?;
        let addr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(get("APP_ENV").as_deref());

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let token_symmetric_key = get("TOKEN_SYMMETRIC_KEY")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("TOKEN_SYMMETRIC_KEY"))?;

        let ttl_seconds: i64 = parse_or(
            "ACCESS_TOKEN_TTL_SECONDS",
            get("ACCESS_TOKEN_TTL_SECONDS"),
            900, // 15 min
        )?;
        let access_token_ttl = chrono::Duration::try_seconds(ttl_seconds)
            .ok_or(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"))?;

        let timeout_seconds: u64 =
            parse_or("REQUEST_TIMEOUT_SECONDS", get("REQUEST_TIMEOUT_SECONDS"), 30)?;

        let request_body_limit_bytes: usize = parse_or(
            "REQUEST_BODY_LIMIT_BYTES",
            get("REQUEST_BODY_LIMIT_BYTES"),
            1024 * 1024,
        )?;

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            token_symmetric_key,
            access_token_ttl,
            request_timeout: StdDuration::from_secs(timeout_seconds),
            request_body_limit_bytes,
        })
    }
}

// Absent -> default, present but unparsable -> Invalid.
fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "12345678901234567890123456789012";

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = Config::from_source(source(&[("TOKEN_SYMMETRIC_KEY", KEY)])).unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.access_token_ttl, chrono::Duration::minutes(15));
        assert_eq!(config.request_timeout, StdDuration::from_secs(30));
        assert_eq!(config.request_body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn missing_token_key_fails() {
        let err = Config::from_source(source(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TOKEN_SYMMETRIC_KEY")));

        let err = Config::from_source(source(&[("TOKEN_SYMMETRIC_KEY", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TOKEN_SYMMETRIC_KEY")));
    }

    #[test]
    fn unparsable_values_are_invalid() {
        let err = Config::from_source(source(&[
            ("TOKEN_SYMMETRIC_KEY", KEY),
            ("ACCESS_TOKEN_TTL_SECONDS", "15m"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS")));

        let err = Config::from_source(source(&[("TOKEN_SYMMETRIC_KEY", KEY), ("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT")));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_source(source(&[
            ("TOKEN_SYMMETRIC_KEY", KEY),
            ("PORT", "8081"),
            ("APP_ENV", "PROD"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("ACCESS_TOKEN_TTL_SECONDS", "60"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8081);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.access_token_ttl, chrono::Duration::seconds(60));
    }

    #[test]
    fn debug_hides_the_token_key() {
        let config = Config::from_source(source(&[("TOKEN_SYMMETRIC_KEY", KEY)])).unwrap();

        assert!(!format!("{config:?}").contains(KEY));
    }
}
