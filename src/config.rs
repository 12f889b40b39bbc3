// ABOUTME: Startup configuration - reads env (and .env) into a validated Config.
// ABOUTME: Lookup is injectable so tests never touch the process environment.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_CEO_CHANNEL: &str = "ceo";
const DEFAULT_TEMPERATURE: f64 = 0.0;
const DEFAULT_MAX_ITERATIONS: usize = 10;
const DEFAULT_APPROVAL_TIMEOUT_SECS: u64 = 300;

/// Everything the driver needs, validated once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the chat-completion provider.
    pub openai_api_key: String,

    /// Override for OpenAI-compatible endpoints.
    pub openai_base_url: Option<String>,

    pub model: String,
    pub temperature: f64,
    pub max_iterations: usize,

    /// Slack channel or user id of the CEO's DM.
    pub ceo_channel: String,

    /// How long the approval gate waits for a human decision.
    pub approval_timeout: Duration,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let temperature = match get("ASSISTANT_TEMPERATURE") {
            Some(raw) => parse::<f64>("ASSISTANT_TEMPERATURE", &raw)?,
            None => DEFAULT_TEMPERATURE,
        };
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::Invalid {
                key: "ASSISTANT_TEMPERATURE",
                message: format!("{temperature} is outside 0..=2"),
            });
        }

        let max_iterations = match get("ASSISTANT_MAX_ITERATIONS") {
            Some(raw) => parse::<usize>("ASSISTANT_MAX_ITERATIONS", &raw)?,
            None => DEFAULT_MAX_ITERATIONS,
        };
        if max_iterations == 0 {
            return Err(ConfigError::Invalid {
                key: "ASSISTANT_MAX_ITERATIONS",
                message: "must be at least 1".into(),
            });
        }

        let timeout_secs = match get("APPROVAL_TIMEOUT_SECS") {
            Some(raw) => parse::<u64>("APPROVAL_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_APPROVAL_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "APPROVAL_TIMEOUT_SECS",
                message: "must be at least 1".into(),
            });
        }

        Ok(Self {
            openai_api_key,
            openai_base_url: get("OPENAI_BASE_URL"),
            model: get("ASSISTANT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            max_iterations,
            ceo_channel: get("CEO_SLACK_CHANNEL").unwrap_or_else(|| DEFAULT_CEO_CHANNEL.to_string()),
            approval_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })
}
