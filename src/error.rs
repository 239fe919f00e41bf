use thiserror::Error;

/// Classified authentication failures. Every variant carries (or maps to) an
/// HTTP status code so glue layers can translate failures into protocol
/// responses without inspecting the variant.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The panel answered with an HTTP error status. The message is the
    /// panel's own `{message}` body field when present, otherwise a
    /// per-operation fallback.
    #[error("{message}")]
    Rejected { message: String, status: u16 },

    /// HTTP success but the expected nested field was missing from the
    /// response envelope.
    #[error("Invalid response format")]
    MalformedResponse,

    /// No response received from the panel.
    #[error("Authentication service unavailable")]
    ServiceUnavailable,

    #[error("baseUrl is required")]
    MissingBaseUrl,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("failed to initialize HTTP client")]
    Client(#[from] reqwest::Error),
}

impl AuthError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Rejected { status, .. } => *status,
            Self::MalformedResponse | Self::Client(_) => 500,
            Self::ServiceUnavailable => 503,
            Self::MissingBaseUrl | Self::InvalidBaseUrl(_) => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_carries_remote_status_and_message() {
        let err = AuthError::Rejected {
            message: "bad credentials".to_string(),
            status: 401,
        };
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.to_string(), "bad credentials");
    }

    #[test]
    fn malformed_response_is_500() {
        let err = AuthError::MalformedResponse;
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Invalid response format");
    }

    #[test]
    fn service_unavailable_is_503() {
        let err = AuthError::ServiceUnavailable;
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.to_string(), "Authentication service unavailable");
    }

    #[test]
    fn missing_base_url_is_a_client_side_400() {
        assert_eq!(AuthError::MissingBaseUrl.status_code(), 400);
    }
}
