//! Error payload helpers.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// JSON error body: `{"detail": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    detail: String,
}

pub fn bad_request(detail: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_shape() {
        let (status, Json(body)) = bad_request("Message cannot be empty");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "detail": "Message cannot be empty" })
        );
    }
}
