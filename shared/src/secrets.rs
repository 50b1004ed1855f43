//! AWS Secrets Manager integration.

use aws_sdk_secretsmanager::Client as SecretsClient;
use std::collections::HashMap;
use std::sync::OnceLock;
use tokio::sync::RwLock;

use crate::{ApiKeySource, Error, Result};

/// Cached secrets with lazy initialization.
static SECRETS_CACHE: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, String>> {
    SECRETS_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Get a secret value from Secrets Manager with caching.
pub async fn get_secret(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    {
        let cache = get_cache().read().await;
        if let Some(value) = cache.get(secret_arn) {
            return Ok(value.clone());
        }
    }

    let response = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| Error::Aws("Secret has no string value".to_string()))?
        .to_string();

    {
        let mut cache = get_cache().write().await;
        cache.insert(secret_arn.to_string(), secret_string.clone());
    }

    Ok(secret_string)
}

/// Resolve the configured key source to the API key itself.
///
/// Only a `SecretArn` source touches AWS; a plain key is returned as-is.
pub async fn resolve_api_key(source: &ApiKeySource) -> Result<String> {
    match source {
        ApiKeySource::Plain(key) => Ok(key.clone()),
        ApiKeySource::SecretArn(arn) => {
            let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = SecretsClient::new(&aws);
            get_api_key(&client, arn).await
        }
    }
}

/// Get the Resend API key from Secrets Manager.
pub async fn get_api_key(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    let secret_string = get_secret(client, secret_arn).await?;
    parse_api_key(&secret_string)
}

/// Extract the API key from a secret stored either raw or as a JSON object.
fn parse_api_key(secret: &str) -> Result<String> {
    let trimmed = secret.trim();

    if trimmed.starts_with('{') {
        let value: serde_json::Value = serde_json::from_str(trimmed)
            .map_err(|e| Error::Config(format!("Failed to parse API key secret: {}", e)))?;

        return ["api_key", "RESEND_API_KEY"]
            .iter()
            .find_map(|k| value.get(*k).and_then(|v| v.as_str()))
            .map(str::to_string)
            .ok_or_else(|| Error::Config("API key secret has no api_key field".to_string()));
    }

    if trimmed.is_empty() {
        return Err(Error::Config("API key secret is empty".to_string()));
    }

    Ok(trimmed.to_string())
}
