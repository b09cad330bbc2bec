use anyhow::{Context, Result};

use crate::analysis::prompts::TASK_LADDER_LEN;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on JSON request bodies.
    pub max_body_bytes: usize,
    /// How many model attempts a caller makes before settling for the
    /// default task list. Clamped to the task prompt ladder.
    pub max_task_attempts: usize,
}

const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let max_task_attempts: usize =
            parse_env("MAX_TASK_ATTEMPTS", defaults.max_task_attempts)?;

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_body_bytes: parse_env("MAX_BODY_BYTES", defaults.max_body_bytes)?,
            max_task_attempts: max_task_attempts.clamp(1, TASK_LADDER_LEN),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_task_attempts: TASK_LADDER_LEN,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
