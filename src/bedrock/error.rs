//! Bedrock error types.

use thiserror::Error;

/// Errors that can occur when resolving an adapter or invoking a model.
#[derive(Debug, Error)]
pub enum BedrockError {
    /// Configured model identifier matches no known family.
    #[error("unknown model family for model id '{model_id}'")]
    UnknownModelFamily { model_id: String },

    /// HTTP request failed.
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Bedrock returned an error response.
    #[error("bedrock error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response envelope is missing the expected field path.
    #[error("malformed model response: missing {path}")]
    MalformedResponse { path: &'static str },
}

impl BedrockError {
    /// The user-facing rendering of this error.
    ///
    /// The chat endpoints never surface a hard failure; they answer with this
    /// text instead. The wording is part of the historical contract and must
    /// not change.
    pub fn user_message(&self) -> String {
        match self {
            BedrockError::UnknownModelFamily { .. } => {
                "Unknown model type configured.".to_string()
            }
            other => format!(
                "I apologize, but I'm having trouble accessing the AI service \
                 right now. Error: {other}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_family_renders_fixed_sentence() {
        let err = BedrockError::UnknownModelFamily {
            model_id: "amazon.nova-pro-v1:0".to_string(),
        };
        assert_eq!(err.user_message(), "Unknown model type configured.");
    }

    #[test]
    fn other_errors_render_apology_with_description() {
        let err = BedrockError::Api {
            status: 403,
            message: "not authorized".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.starts_with(
            "I apologize, but I'm having trouble accessing the AI service right now. Error: "
        ));
        assert!(msg.contains("status 403"));
        assert!(msg.contains("not authorized"));
    }

    #[test]
    fn malformed_response_names_the_field_path() {
        let err = BedrockError::MalformedResponse {
            path: "/content/0/text",
        };
        assert!(err.to_string().contains("/content/0/text"));
    }
}
