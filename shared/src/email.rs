//! Resend transactional email client.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::{Config, Error, Result};

/// Request body for `POST /emails`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    /// Recipients exactly as submitted
    pub to: Vec<Value>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Client for the Resend email API.
///
/// Sends exactly one request per call; there is no retry.
#[derive(Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendClient {
    /// Build a client with the configured base URL and timeout.
    pub fn new(config: &Config, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.provider_timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/emails", config.api_base_url),
            api_key: api_key.into(),
        })
    }

    /// Send an email, returning the provider's message id when it reports one.
    pub async fn send(&self, email: &OutboundEmail) -> Result<Option<String>> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), detail = %detail, "Resend API error");
            return Err(Error::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let message_id = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|r| r.id);

        info!(message_id = ?message_id, "Email accepted by Resend");
        Ok(message_id)
    }
}
