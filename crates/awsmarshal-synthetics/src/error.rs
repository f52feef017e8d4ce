//! Synthetics service errors.

use awsmarshal_client::error_entry;
use awsmarshal_core::{ErrorEntry, GenericServiceError, ServiceError};
use awsmarshal_json::error_payload;
use serde::Deserialize;

/// Payload shared by every Synthetics error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SyntheticsErrorDetail {
    /// Description.
    #[serde(rename = "Message", alias = "message")]
    pub message: Option<String>,
}

/// Errors returned by Synthetics operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SyntheticsError {
    /// Input failed validation.
    #[error("ValidationException: {}", .0.message.as_deref().unwrap_or_default())]
    Validation(SyntheticsErrorDetail),
    /// The canary is in a state that does not allow the change.
    #[error("ConflictException: {}", .0.message.as_deref().unwrap_or_default())]
    Conflict(SyntheticsErrorDetail),
    /// The canary does not exist.
    #[error("ResourceNotFoundException: {}", .0.message.as_deref().unwrap_or_default())]
    ResourceNotFound(SyntheticsErrorDetail),
    /// The request body is too large.
    #[error("RequestEntityTooLargeException: {}", .0.message.as_deref().unwrap_or_default())]
    RequestEntityTooLarge(SyntheticsErrorDetail),
    /// Requests are being throttled.
    #[error("TooManyRequestsException: {}", .0.message.as_deref().unwrap_or_default())]
    TooManyRequests(SyntheticsErrorDetail),
    /// The service failed.
    #[error("InternalServerException: {}", .0.message.as_deref().unwrap_or_default())]
    InternalServer(SyntheticsErrorDetail),
    /// Any code not listed above.
    #[error(transparent)]
    Unhandled(GenericServiceError),
}

static REGISTRY: &[ErrorEntry<SyntheticsError>] = &[
    error_entry!("ValidationException" => SyntheticsError::Validation, error_payload),
    error_entry!("ConflictException" => SyntheticsError::Conflict, error_payload),
    error_entry!("ResourceNotFoundException" => SyntheticsError::ResourceNotFound, error_payload),
    error_entry!("RequestEntityTooLargeException" => SyntheticsError::RequestEntityTooLarge, error_payload),
    error_entry!("TooManyRequestsException" => SyntheticsError::TooManyRequests, error_payload),
    error_entry!("InternalServerException" => SyntheticsError::InternalServer, error_payload),
];

impl ServiceError for SyntheticsError {
    fn registry() -> &'static [ErrorEntry<Self>] {
        REGISTRY
    }

    fn unhandled(err: GenericServiceError) -> Self {
        Self::Unhandled(err)
    }
}

#[cfg(test)]
mod tests {
    use awsmarshal_client::{AwsJson, Protocol};
    use awsmarshal_core::RawResponse;
    use http::StatusCode;

    use super::*;

    fn decode(raw: &RawResponse) -> SyntheticsError {
        SyntheticsError::from_response(&AwsJson::error_response(raw))
    }

    #[test]
    fn test_should_decode_code_from_error_type_header() {
        let raw = RawResponse::new(StatusCode::CONFLICT, r#"{"Message":"canary is running"}"#)
            .with_header("x-amzn-errortype", "ConflictException:http://internal.amazon.com/");
        match decode(&raw) {
            SyntheticsError::Conflict(detail) => {
                assert_eq!(detail.message.as_deref(), Some("canary is running"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_should_accept_lowercase_message_key() {
        let raw = RawResponse::new(
            StatusCode::NOT_FOUND,
            r#"{"__type":"ResourceNotFoundException","message":"no canary"}"#,
        );
        let err = decode(&raw);
        assert!(matches!(err, SyntheticsError::ResourceNotFound(_)));
        assert_eq!(err.to_string(), "ResourceNotFoundException: no canary");
    }

    #[test]
    fn test_should_keep_unknown_code_as_unhandled() {
        let raw = RawResponse::new(
            StatusCode::BAD_REQUEST,
            r#"{"__type":"CanaryQuotaExceeded","Message":"nope"}"#,
        )
        .with_header("x-amzn-requestid", "req-42");
        match decode(&raw) {
            SyntheticsError::Unhandled(e) => {
                assert_eq!(e.code, "CanaryQuotaExceeded");
                assert_eq!(e.message.as_deref(), Some("nope"));
                assert_eq!(e.request_id.as_deref(), Some("req-42"));
                assert_eq!(e.status, 400);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
