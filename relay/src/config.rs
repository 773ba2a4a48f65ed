use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Relay settings, read once at startup.
///
/// The key and store are optional here: a process without them still serves
/// the liveness route and fails each chat request instead.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub store_id: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

/// The two values every upstream call needs.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub api_key: &'a str,
    pub store_id: &'a str,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let timeout_secs = match non_empty("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| {
                    format!("GEMINI_TIMEOUT_SECS must be a positive number of seconds, got {raw:?}")
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key: non_empty("GEMINI_API_KEY"),
            store_id: non_empty("STORE_ID"),
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn credentials(&self) -> Result<Credentials<'_>, ConfigError> {
        match (self.api_key.as_deref(), self.store_id.as_deref()) {
            (Some(api_key), Some(store_id)) => Ok(Credentials { api_key, store_id }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}
