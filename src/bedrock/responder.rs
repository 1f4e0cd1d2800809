//! Responder service: resolves the adapter and answers chat messages.

use std::sync::Arc;

use tracing::info;

use super::adapter::{ModelAdapter, ModelFamily};
use super::client::{BedrockClient, BedrockRuntime};
use super::error::BedrockError;
use crate::config::{BedrockConfig, HealthMode};

/// Probe message used by the health check.
const HEALTH_PROBE: &str = "Hello";

/// Answers chat messages through the configured model family.
///
/// Read-only after construction and shared across requests.
pub struct Responder {
    runtime: Arc<dyn BedrockRuntime>,
    adapter: &'static dyn ModelAdapter,
    model_id: String,
    health_mode: HealthMode,
}

impl Responder {
    /// Build the production responder from configuration.
    ///
    /// Fails when the model identifier matches no known family, so a
    /// misconfigured deployment stops at boot instead of at first request.
    pub fn from_config(
        config: &BedrockConfig,
        bearer_token: Option<String>,
    ) -> Result<Self, BedrockError> {
        let family = ModelFamily::detect(&config.model_id).ok_or_else(|| {
            BedrockError::UnknownModelFamily {
                model_id: config.model_id.clone(),
            }
        })?;
        info!(model_id = %config.model_id, %family, "configured model adapter");

        let client = BedrockClient::new(&config.region, bearer_token);
        Ok(Self::new(
            family,
            config.model_id.clone(),
            Arc::new(client),
            config.health_check,
        ))
    }

    /// Build a responder over an explicit runtime.
    pub fn new(
        family: ModelFamily,
        model_id: String,
        runtime: Arc<dyn BedrockRuntime>,
        health_mode: HealthMode,
    ) -> Self {
        Self {
            runtime,
            adapter: family.adapter(),
            model_id,
            health_mode,
        }
    }

    /// Answer a chat message with generated text.
    ///
    /// Builds the family-specific request, invokes the model, and extracts
    /// the reply. Errors stay typed here; the chat endpoint is the one place
    /// that folds them into the fail-soft reply text.
    pub async fn generate_response(&self, message: &str) -> Result<String, BedrockError> {
        let body = self.adapter.build_request(message);
        let envelope = self.runtime.invoke_model(&self.model_id, &body).await?;
        self.adapter.parse_response(&envelope)
    }

    /// Probe the model with a trivial message.
    pub async fn health_check(&self) -> bool {
        let result = self.generate_response(HEALTH_PROBE).await;
        match self.health_mode {
            HealthMode::Strict => matches!(&result, Ok(text) if !text.is_empty()),
            HealthMode::Lenient => {
                // Inherited contract: any non-empty reply text counts,
                // including the apology rendered from a failed call.
                let text = result.unwrap_or_else(|e| e.user_message());
                !text.is_empty()
            }
        }
    }
}
