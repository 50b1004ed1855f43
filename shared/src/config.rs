//! Configuration management for the RSVP Lambda function.

use std::env;
use std::time::Duration;

use crate::{Error, Result};

const DEFAULT_API_URL: &str = "https://api.resend.com";
const DEFAULT_SENDER_NAME: &str = "Muhil & Kalyanni";
const DEFAULT_SUBJECT: &str = "✓ Your RSVP is Confirmed!";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the provider API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Key injected directly through the environment
    Plain(String),
    /// ARN of a Secrets Manager secret holding the key
    SecretArn(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key or where to fetch it
    pub api_key: ApiKeySource,
    /// Verified sender address
    pub from_email: String,
    /// Display name used in the `from` header and the email sign-off
    pub sender_name: String,
    /// Subject line of the confirmation email
    pub subject: String,
    /// Provider base URL, without the `/emails` path
    pub api_base_url: String,
    /// Upper bound on the outbound provider call
    pub provider_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = match (non_empty("RESEND_API_KEY"), non_empty("RESEND_API_KEY_SECRET_ARN")) {
            (Some(key), _) => ApiKeySource::Plain(key),
            (None, Some(arn)) => ApiKeySource::SecretArn(arn),
            (None, None) => {
                return Err(Error::Config(
                    "RESEND_API_KEY or RESEND_API_KEY_SECRET_ARN must be set".to_string(),
                ))
            }
        };

        let from_email = non_empty("RESEND_FROM_EMAIL")
            .ok_or_else(|| Error::Config("RESEND_FROM_EMAIL not set".to_string()))?;

        let provider_timeout = match non_empty("RSVP_PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::Config(format!("RSVP_PROVIDER_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            from_email,
            sender_name: non_empty("RSVP_SENDER_NAME")
                .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
            subject: non_empty("RSVP_EMAIL_SUBJECT").unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            api_base_url: non_empty("RESEND_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            provider_timeout,
        })
    }

    /// The `from` header value in the display-name form the provider expects.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.sender_name, self.from_email)
    }
}
