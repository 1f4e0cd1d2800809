//! Model family detection and the per-family adapter capability.

use std::fmt;

use serde_json::Value;

use super::claude::ClaudeAdapter;
use super::error::BedrockError;
use super::titan::TitanAdapter;

/// A group of Bedrock models sharing one request/response schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// Anthropic Claude models (`anthropic.claude-*`).
    Claude,
    /// Amazon Titan text models (`amazon.titan-*`).
    Titan,
}

impl ModelFamily {
    /// Detect the family from a model identifier.
    ///
    /// Matching is a case-insensitive substring check, so inference-profile
    /// prefixed identifiers (`us.anthropic.claude-...`) resolve as well. The
    /// Bedrock naming scheme guarantees no identifier carries two markers.
    pub fn detect(model_id: &str) -> Option<Self> {
        let id = model_id.to_lowercase();
        if id.contains("claude") {
            Some(ModelFamily::Claude)
        } else if id.contains("titan") {
            Some(ModelFamily::Titan)
        } else {
            None
        }
    }

    /// The adapter implementing this family's schema.
    pub fn adapter(self) -> &'static dyn ModelAdapter {
        match self {
            ModelFamily::Claude => &ClaudeAdapter,
            ModelFamily::Titan => &TitanAdapter,
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFamily::Claude => write!(f, "claude"),
            ModelFamily::Titan => write!(f, "titan"),
        }
    }
}

/// Translation between a user message and one family's wire schema.
///
/// A new family means a new implementation plus a [`ModelFamily`] variant;
/// existing adapters stay untouched.
pub trait ModelAdapter: Send + Sync {
    /// Wrap a non-empty user message in the family's request body.
    ///
    /// The message is embedded verbatim after the fixed assistant prompt; no
    /// sanitizing or truncation happens here.
    fn build_request(&self, message: &str) -> Value;

    /// Extract the generated text from the family's response envelope.
    fn parse_response(&self, body: &Value) -> Result<String, BedrockError>;
}
