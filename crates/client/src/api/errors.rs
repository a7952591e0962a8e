//! API errors.

use thiserror::Error;

use crate::api::requests::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or an undecodable response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered, but refused the request.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// The `error` field of the response body, when there was one.
        message: Option<String>,
    },
}

impl ApiError {
    /// Build a rejection from a non-2xx status and its raw body.
    ///
    /// Bodies that are not `{ "error": ... }` JSON (the backend answers some
    /// failures with plain text) carry no message.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.error)
            .filter(|message| !message.trim().is_empty());

        Self::Rejected { status, message }
    }

    /// Message supplied by the backend, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            Self::Rejected { message: None, .. } | Self::Http(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_extracts_error_field() {
        let error = ApiError::rejected(400, r#"{"error":"Invalid discount type"}"#);

        assert_eq!(error.server_message(), Some("Invalid discount type"));
        assert!(matches!(error, ApiError::Rejected { status: 400, .. }));
    }

    #[test]
    fn test_rejected_plain_text_body_has_no_message() {
        let error = ApiError::rejected(405, "Method not allowed");

        assert_eq!(error.server_message(), None);
    }

    #[test]
    fn test_rejected_blank_error_has_no_message() {
        let error = ApiError::rejected(400, r#"{"error":"  "}"#);

        assert_eq!(error.server_message(), None);
    }
}
