//! Configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Supabase project configuration
    pub supabase: SupabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. https://xyz.supabase.co
    pub url: String,

    /// Public anon key of the project
    pub anon_key: String,

    /// Session JWT of the signed-in seller
    #[serde(default)]
    pub access_token: Option<String>,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(config::Environment::default())
    }

    fn from_source(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                env.separator("__")
                    // Keep "+91..." a string instead of parsing it as a number
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default().source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_source(env(&[
            ("SUPABASE__URL", "https://project.supabase.co"),
            ("SUPABASE__ANON_KEY", "anon"),
        ]))
        .unwrap();

        assert_eq!(config.supabase.url, "https://project.supabase.co");
        assert_eq!(config.supabase.anon_key, "anon");
        assert!(config.supabase.access_token.is_none());
        assert_eq!(config.supabase.timeout, Duration::from_secs(10));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_source(env(&[
            ("SUPABASE__URL", "http://localhost:54321"),
            ("SUPABASE__ANON_KEY", "anon"),
            ("SUPABASE__ACCESS_TOKEN", "jwt"),
            ("SUPABASE__TIMEOUT", "2s"),
            ("LOG__LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.supabase.access_token.as_deref(), Some("jwt"));
        assert_eq!(config.supabase.timeout, Duration::from_secs(2));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_missing_url_fails() {
        let result = Config::from_source(env(&[("SUPABASE__ANON_KEY", "anon")]));
        assert!(result.is_err());
    }
}
