//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` before calling
//! [`AppConfig::from_env`]; everything else receives the typed config.

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
pub const PROVIDER_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
    #[error("invalid {var}: {value:?} must start with http:// or https://")]
    UrlScheme { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the hosted identity provider; `None` disables it.
    pub identity_url: Option<String>,
    /// Base URL of the hosted data backend; `None` disables it.
    pub backend_url: Option<String>,
    pub provider_timeout_secs: u64,
    pub invite_members: bool,
    pub public_dir: PathBuf,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IDENTITY_PROVIDER_URL`: identity provider base URL
    /// - `DATA_BACKEND_URL`: data backend base URL
    /// - `PROVIDER_TIMEOUT_SECS`: default 10
    /// - `FEATURE_INVITE_MEMBERS`: default off
    /// - `PUBLIC_DIR`: static assets, default `../public` next to this crate
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from any key lookup (the process env in production).
    ///
    /// # Errors
    ///
    /// Returns an error when a present value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), "port number", DEFAULT_PORT)?;
        let provider_timeout_secs = parse_or(
            "PROVIDER_TIMEOUT_SECS",
            lookup("PROVIDER_TIMEOUT_SECS"),
            "number of seconds",
            DEFAULT_PROVIDER_TIMEOUT_SECS,
        )?;
        if provider_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "PROVIDER_TIMEOUT_SECS",
                value: "0".into(),
                expected: "positive number of seconds",
            });
        }

        Ok(Self {
            port,
            identity_url: parse_url("IDENTITY_PROVIDER_URL", lookup("IDENTITY_PROVIDER_URL"))?,
            backend_url: parse_url("DATA_BACKEND_URL", lookup("DATA_BACKEND_URL"))?,
            provider_timeout_secs,
            invite_members: parse_flag("FEATURE_INVITE_MEMBERS", lookup("FEATURE_INVITE_MEMBERS"))?,
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Boolean flag; unset or blank is off, anything unrecognized is an error.
fn parse_flag(var: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => {
            parse_bool(&raw).ok_or(ConfigError::Invalid { var, value: raw, expected: "boolean (1/0, true/false, yes/no, on/off)" })
        }
        _ => Ok(false),
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw, expected }),
        _ => Ok(default),
    }
}

fn parse_url(var: &'static str, raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::UrlScheme { var, value: raw });
    }
    Ok(Some(trimmed.trim_end_matches('/').to_string()))
}
