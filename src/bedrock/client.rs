//! Bedrock runtime transport.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::BedrockError;

/// The boundary to the external model API.
///
/// The production implementation talks to the Bedrock runtime endpoint over
/// HTTPS; tests substitute stubs.
#[async_trait]
pub trait BedrockRuntime: Send + Sync {
    /// Invoke a model with a family-specific request body, returning the raw
    /// response envelope.
    async fn invoke_model(&self, model_id: &str, body: &Value) -> Result<Value, BedrockError>;
}

/// HTTP client for the Bedrock runtime REST API.
pub struct BedrockClient {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl BedrockClient {
    /// Create a client for the given AWS region.
    ///
    /// Auth uses a Bedrock API key as a bearer token. Without one, requests
    /// still go out and fail with the service's auth error.
    pub fn new(region: &str, bearer_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("https://bedrock-runtime.{region}.amazonaws.com"),
            bearer_token,
        }
    }
}

#[async_trait]
impl BedrockRuntime for BedrockClient {
    async fn invoke_model(&self, model_id: &str, body: &Value) -> Result<Value, BedrockError> {
        // Model ids carry `.` and `:`; keep the path segment encoded.
        let url = format!(
            "{}/model/{}/invoke",
            self.base_url,
            urlencoding::encode(model_id)
        );
        debug!(model_id, "invoking bedrock model");

        let mut req = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        if let Some(ref token) = self.bearer_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let response = req.json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(BedrockError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_follows_region() {
        let client = BedrockClient::new("eu-central-1", None);
        assert_eq!(
            client.base_url,
            "https://bedrock-runtime.eu-central-1.amazonaws.com"
        );
    }
}
