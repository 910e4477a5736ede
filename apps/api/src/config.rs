use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Hosting platform's hard execution ceiling.
const DEFAULT_PLATFORM_TIMEOUT_MS: u64 = 10_000;
/// Model deadline sits 1.5s under the platform ceiling so the gateway can still answer.
const DEFAULT_MODEL_DEADLINE_MS: u64 = 8_500;

/// Application configuration loaded from environment variables.
///
/// The model credential is optional at startup: its absence is reported per
/// request as a configuration error instead of preventing the server from booting.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub model_deadline: Duration,
    pub platform_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_base", &self.gemini_api_base)
            .field("model_deadline", &self.model_deadline)
            .field("platform_timeout", &self.platform_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model_deadline: millis_env("MODEL_DEADLINE_MS", DEFAULT_MODEL_DEADLINE_MS)?,
            platform_timeout: millis_env("PLATFORM_TIMEOUT_MS", DEFAULT_PLATFORM_TIMEOUT_MS)?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        config.check_deadlines()?;
        Ok(config)
    }

    /// The model deadline must be strictly tighter than the platform ceiling.
    pub fn check_deadlines(&self) -> Result<()> {
        if self.model_deadline >= self.platform_timeout {
            bail!(
                "MODEL_DEADLINE_MS ({}ms) must be lower than PLATFORM_TIMEOUT_MS ({}ms)",
                self.model_deadline.as_millis(),
                self.platform_timeout.as_millis()
            );
        }
        Ok(())
    }

    /// A configuration suitable for tests: a credential present and default deadlines.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: Some("test-key".to_string()),
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            model_deadline: Duration::from_millis(DEFAULT_MODEL_DEADLINE_MS),
            platform_timeout: Duration::from_millis(DEFAULT_PLATFORM_TIMEOUT_MS),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn millis_env(key: &str, default: u64) -> Result<Duration> {
    let millis = match optional_env(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of milliseconds"))?,
        None => default,
    };
    Ok(Duration::from_millis(millis))
}
