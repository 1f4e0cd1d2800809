//! Titan adapter using the Amazon Titan text-generation schema.

use serde_json::{Value, json};

use super::adapter::ModelAdapter;
use super::error::BedrockError;

const MAX_TOKEN_COUNT: u32 = 1000;
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;

/// Field path of the generated text in the response envelope.
const RESPONSE_TEXT: &str = "/results/0/outputText";

/// Adapter for Amazon Titan text models.
pub struct TitanAdapter;

impl TitanAdapter {
    fn prompt(message: &str) -> String {
        format!(
            "You are a helpful AI assistant for Azercell, Azerbaijan's leading mobile operator.\n\
             \n\
             Azercell Information:\n\
             - Founded in 1996, Azerbaijan's first mobile operator\n\
             - Serves millions of customers nationwide\n\
             - Offers 4G/5G networks, mobile internet, digital solutions\n\
             - Headquarters in Baku, Azerbaijan\n\
             - Known for reliable coverage and innovation\n\
             \n\
             User Question: {message}\n\
             \n\
             Please provide a helpful response about Azercell services or general assistance:"
        )
    }
}

impl ModelAdapter for TitanAdapter {
    fn build_request(&self, message: &str) -> Value {
        json!({
            "inputText": Self::prompt(message),
            "textGenerationConfig": {
                "maxTokenCount": MAX_TOKEN_COUNT,
                "stopSequences": [],
                "temperature": TEMPERATURE,
                "topP": TOP_P,
            },
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_text_generation_schema() {
        let body = TitanAdapter.build_request("Where are you headquartered?");

        let input = body["inputText"].as_str().unwrap();
        assert!(input.starts_with("You are a helpful AI assistant for Azercell"));
        assert!(input.contains("User Question: Where are you headquartered?"));

        let config = &body["textGenerationConfig"];
        assert_eq!(config["maxTokenCount"], 1000);
        assert_eq!(config["temperature"], 0.7);
        assert_eq!(config["topP"], 0.9);
        assert_eq!(config["stopSequences"], serde_json::json!([]));
    }

    #[test]
    fn response_text_is_first_result() {
        let body = serde_json::json!({
            "results": [{ "outputText": "Baku, Azerbaijan.", "completionReason": "FINISH" }],
        });
        assert_eq!(
            TitanAdapter.parse_response(&body).unwrap(),
            "Baku, Azerbaijan."
        );
    }

    #[test]
    fn missing_results_is_malformed() {
        let body = serde_json::json!({ "content": [{ "text": "wrong family" }] });
        let err = TitanAdapter.parse_response(&body).unwrap_err();
        assert!(matches!(err, BedrockError::MalformedResponse { .. }));
    }
}
