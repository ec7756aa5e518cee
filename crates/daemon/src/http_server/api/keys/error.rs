use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use common::release::{ErrorKind, InputError, ReleaseError};

/// JSON body of every failed key request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_until_available: Option<u64>,
}

/// Renders a [`ReleaseError`] as an HTTP response
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct KeyApiError(#[from] pub ReleaseError);

impl From<InputError> for KeyApiError {
    fn from(err: InputError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for KeyApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        match err.kind() {
            ErrorKind::Internal => tracing::error!(error = %err, "key request failed"),
            _ => tracing::debug!(error = %err, "key request rejected"),
        }

        let body = ErrorBody {
            error: err.public_message(),
            seconds_until_available: err.seconds_until_available(),
        };
        (err.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use common::crypto::DerivationError;

    #[test]
    fn test_locked_response() {
        let response = KeyApiError(ReleaseError::NotYetAvailable {
            epoch: 1,
            seconds_until_available: 4,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_input_response() {
        let response = KeyApiError::from(InputError::MissingEpoch).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_response() {
        let err: ReleaseError = DerivationError::KeyMaterial {
            expected: 32,
            actual: 16,
        }
        .into();
        let response = KeyApiError(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_body_skips_missing_wait() {
        let body = ErrorBody {
            error: "Epoch parameter is required.".to_string(),
            seconds_until_available: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Epoch parameter is required."}"#
        );
    }
}
