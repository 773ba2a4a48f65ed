use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing API Key or Store ID")]
    MissingCredentials,
}

/// Why an upstream call produced no answer text.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, TLS, timeout or body read failure. The URL is stripped
    /// before construction since it carries the API key.
    #[error("{}", describe(.0))]
    Transport(#[source] reqwest::Error),

    #[error("response was not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("upstream returned status {code}")]
    Status { code: u16, body: String },

    #[error("no answer text in response")]
    NoAnswer,
}

impl UpstreamError {
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

/// Flattens an error and its sources into one line, reqwest keeps the useful
/// part (connection refused, timed out) in the source chain.
fn describe(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let inner_text = inner.to_string();
        if !text.contains(&inner_text) {
            text.push_str(": ");
            text.push_str(&inner_text);
        }
        source = inner.source();
    }
    text
}
