//! Claude adapter using the Anthropic-on-Bedrock messages schema.

use serde_json::{Value, json};

use super::adapter::ModelAdapter;
use super::error::BedrockError;

/// Anthropic schema version required by Bedrock.
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

const MAX_TOKENS: u32 = 1000;

/// Field path of the generated text in the response envelope.
const RESPONSE_TEXT: &str = "/content/0/text";

/// Adapter for Claude models.
pub struct ClaudeAdapter;

impl ClaudeAdapter {
    fn prompt(message: &str) -> String {
        format!(
            "You are a helpful AI assistant for Azercell, Azerbaijan's leading mobile operator.\n\
             \n\
             Here's some information about Azercell:\n\
             - Azercell is Azerbaijan's first and largest mobile network operator\n\
             - Founded in 1996, serving millions of customers\n\
             - Offers 4G/5G mobile services, internet, and digital solutions\n\
             - Known for innovation and quality network coverage\n\
             - Headquarters in Baku, Azerbaijan\n\
             \n\
             User question: {message}\n\
             \n\
             Please provide a helpful response about Azercell services or general assistance."
        )
    }
}

impl ModelAdapter for ClaudeAdapter {
    fn build_request(&self, message: &str) -> Value {
        json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": Self::prompt(message) }],
        })
    }

    fn parse_response(&self, body: &Value) -> Result<String, BedrockError> {
        body.pointer(RESPONSE_TEXT)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(BedrockError::MalformedResponse {
                path: RESPONSE_TEXT,
            })
    }
}
