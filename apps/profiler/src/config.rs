use std::fmt;

use anyhow::{Context, Result};

use crate::profile::variants::ProfileVariant;

pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "sonar-pro";

/// Application configuration loaded from environment variables.
/// Startup fails if `PER_API_KEY` is missing.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub completion_api_url: String,
    pub completion_model: String,
    pub variant: ProfileVariant,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: require_env("PER_API_KEY")?,
            completion_api_url: env_or("COMPLETION_API_URL", DEFAULT_COMPLETION_API_URL),
            completion_model: env_or("COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL),
            variant: env_or("PROFILE_VARIANT", "standard")
                .parse::<ProfileVariant>()
                .context("PROFILE_VARIANT must be one of: standard, sales, compliance")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

// Hand-written so the bearer secret never reaches logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("completion_api_url", &self.completion_api_url)
            .field("completion_model", &self.completion_model)
            .field("variant", &self.variant)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            api_key: "pplx-secret-token".to_string(),
            completion_api_url: DEFAULT_COMPLETION_API_URL.to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            variant: ProfileVariant::Standard,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("pplx-secret-token"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("sonar-pro"));
    }

    #[test]
    fn test_require_env_missing_key_errors() {
        let err = require_env("PROFILER_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(err.to_string().contains("PROFILER_TEST_SURELY_UNSET_VARIABLE"));
    }

    #[test]
    fn test_env_or_uses_default_when_unset() {
        assert_eq!(env_or("PROFILER_TEST_ALSO_UNSET", "fallback"), "fallback");
    }
}
