use thiserror::Error;

/// Failure of a call to the REST API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    Unauthorized,
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error from the response body.
    ///
    /// The API reports errors as `{"message": "..."}` or `{"error": "..."}`;
    /// anything else is shown verbatim.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.trim().to_string());
        Self::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_from_json_body() {
        let err = ApiError::from_status(422, r#"{"message":"code already taken"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "code already taken".into()
            }
        );
        assert_eq!(err.to_string(), "Server returned 422: code already taken");
    }

    #[test]
    fn test_status_message_from_error_key_and_plain_text() {
        assert_eq!(
            ApiError::from_status(500, r#"{"error":"boom"}"#).to_string(),
            "Server returned 500: boom"
        );
        assert_eq!(
            ApiError::from_status(502, "Bad Gateway\n").to_string(),
            "Server returned 502: Bad Gateway"
        );
    }

    #[test]
    fn test_401_is_unauthorized() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    }
}
