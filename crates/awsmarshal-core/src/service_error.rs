//! Error code registry: maps a service-declared code to a typed error.

use std::fmt;

use bytes::Bytes;
use http::StatusCode;
use tracing::warn;

use crate::error::UnmarshalError;

/// A non-success response reduced to the fields every protocol carries.
///
/// Produced by a protocol's error decoder, consumed by the service's registry.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Service error code with any namespace stripped.
    pub code: String,
    /// Human readable message, when the service sent one.
    pub message: Option<String>,
    /// Request id from the body or the response headers.
    pub request_id: Option<String>,
    /// The raw body, for decoders that need service specific fields.
    pub body: Bytes,
}

impl ErrorResponse {
    /// Code used when the body names none: the status reason without spaces,
    /// e.g. `ServiceUnavailable`.
    #[must_use]
    pub fn status_code_name(status: StatusCode) -> String {
        status.canonical_reason().map_or_else(
            || format!("Http{}", status.as_u16()),
            |reason| reason.split_whitespace().collect(),
        )
    }
}

/// Fallback for error codes the service crate does not model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code} (HTTP {status}): {}", message.as_deref().unwrap_or("no message"))]
pub struct GenericServiceError {
    /// Raw error code.
    pub code: String,
    /// Raw message.
    pub message: Option<String>,
    /// Request id, if known.
    pub request_id: Option<String>,
    /// HTTP status code.
    pub status: u16,
}

impl From<&ErrorResponse> for GenericServiceError {
    fn from(resp: &ErrorResponse) -> Self {
        Self {
            code: resp.code.clone(),
            message: resp.message.clone(),
            request_id: resp.request_id.clone(),
            status: resp.status.as_u16(),
        }
    }
}

/// One row of a service error registry.
pub struct ErrorEntry<E> {
    /// Error code as sent by the service.
    pub code: &'static str,
    /// Decodes the structured payload into the typed error.
    pub decode: fn(&ErrorResponse) -> Result<E, UnmarshalError>,
}

impl<E> fmt::Debug for ErrorEntry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorEntry").field("code", &self.code).finish()
    }
}

/// A service's error enum.
///
/// Implementors list the codes they model in [`registry`](Self::registry);
/// everything else becomes [`unhandled`](Self::unhandled).
pub trait ServiceError: std::error::Error + Send + Sync + Sized + 'static {
    /// Known error codes and their decoders.
    fn registry() -> &'static [ErrorEntry<Self>];

    /// Wraps an error whose code is not in the registry.
    fn unhandled(err: GenericServiceError) -> Self;

    /// Decodes an error response into this type.
    fn from_response(resp: &ErrorResponse) -> Self {
        decode_service_error(resp)
    }
}

/// Looks up `resp.code` in `E`'s registry and decodes the matching payload.
///
/// Unknown codes, and payloads that fail to decode, fall back to
/// [`ServiceError::unhandled`] so the caller always sees the service's code.
pub fn decode_service_error<E: ServiceError>(resp: &ErrorResponse) -> E {
    let Some(entry) = E::registry().iter().find(|entry| entry.code == resp.code) else {
        warn!(code = %resp.code, status = %resp.status, "unrecognized service error code");
        return E::unhandled(GenericServiceError::from(resp));
    };

    match (entry.decode)(resp) {
        Ok(err) => err,
        Err(e) => {
            warn!(code = %resp.code, error = %e, "failed to decode service error payload");
            E::unhandled(GenericServiceError::from(resp))
        }
    }
}
