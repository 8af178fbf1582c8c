//! API Error Taxonomy
//!
//! Classifies `/foods` call failures so the dashboard can route each class to
//! a distinct affordance: validation and not-found messages stay inline,
//! network failures get a retry, server failures get a banner.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("the backend rejected the request (status {status})")]
    Validation { status: u16 },
    #[error("the record no longer exists on the backend")]
    NotFound,
    #[error("the backend failed (status {status})")]
    Server { status: u16 },
    #[error("unexpected response status {status}")]
    Unexpected { status: u16 },
    #[error("could not reach the backend: {0}")]
    Network(String),
    #[error("could not decode the backend response: {0}")]
    Decode(String),
}

/// Map a response status to an error class; `None` means success.
pub fn classify_status(status: u16) -> Option<ApiError> {
    match status {
        200..=299 => None,
        400 | 422 => Some(ApiError::Validation { status }),
        404 => Some(ApiError::NotFound),
        500..=599 => Some(ApiError::Server { status }),
        _ => Some(ApiError::Unexpected { status }),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_classify_as_ok() {
        assert_eq!(classify_status(200), None);
        assert_eq!(classify_status(201), None);
        assert_eq!(classify_status(204), None);
    }

    #[test]
    fn client_errors_classify_by_kind() {
        assert_eq!(
            classify_status(400),
            Some(ApiError::Validation { status: 400 })
        );
        assert_eq!(
            classify_status(422),
            Some(ApiError::Validation { status: 422 })
        );
        assert_eq!(classify_status(404), Some(ApiError::NotFound));
        assert_eq!(
            classify_status(418),
            Some(ApiError::Unexpected { status: 418 })
        );
    }

    #[test]
    fn server_errors_classify_as_server() {
        assert_eq!(classify_status(500), Some(ApiError::Server { status: 500 }));
        assert_eq!(classify_status(503), Some(ApiError::Server { status: 503 }));
    }
}
