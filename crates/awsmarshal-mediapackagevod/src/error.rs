//! MediaPackage VOD service errors.

use awsmarshal_client::error_entry;
use awsmarshal_core::{ErrorEntry, GenericServiceError, ServiceError};
use awsmarshal_json::error_payload;
use serde::Deserialize;

/// Payload shared by every MediaPackage VOD error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaPackageVodErrorDetail {
    /// Description.
    pub message: Option<String>,
}

/// Errors returned by MediaPackage VOD operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MediaPackageVodError {
    /// The caller may not perform the action.
    #[error("ForbiddenException: {}", .0.message.as_deref().unwrap_or_default())]
    Forbidden(MediaPackageVodErrorDetail),
    /// The service failed.
    #[error("InternalServerErrorException: {}", .0.message.as_deref().unwrap_or_default())]
    InternalServerError(MediaPackageVodErrorDetail),
    /// The packaging group does not exist.
    #[error("NotFoundException: {}", .0.message.as_deref().unwrap_or_default())]
    NotFound(MediaPackageVodErrorDetail),
    /// The service is unavailable.
    #[error("ServiceUnavailableException: {}", .0.message.as_deref().unwrap_or_default())]
    ServiceUnavailable(MediaPackageVodErrorDetail),
    /// Requests are being throttled.
    #[error("TooManyRequestsException: {}", .0.message.as_deref().unwrap_or_default())]
    TooManyRequests(MediaPackageVodErrorDetail),
    /// The request was well formed but not valid.
    #[error("UnprocessableEntityException: {}", .0.message.as_deref().unwrap_or_default())]
    UnprocessableEntity(MediaPackageVodErrorDetail),
    /// Any code not listed above.
    #[error(transparent)]
    Unhandled(GenericServiceError),
}

static REGISTRY: &[ErrorEntry<MediaPackageVodError>] = &[
    error_entry!("ForbiddenException" => MediaPackageVodError::Forbidden, error_payload),
    error_entry!("InternalServerErrorException" => MediaPackageVodError::InternalServerError, error_payload),
    error_entry!("NotFoundException" => MediaPackageVodError::NotFound, error_payload),
    error_entry!("ServiceUnavailableException" => MediaPackageVodError::ServiceUnavailable, error_payload),
    error_entry!("TooManyRequestsException" => MediaPackageVodError::TooManyRequests, error_payload),
    error_entry!("UnprocessableEntityException" => MediaPackageVodError::UnprocessableEntity, error_payload),
];

impl ServiceError for MediaPackageVodError {
    fn registry() -> &'static [ErrorEntry<Self>] {
        REGISTRY
    }

    fn unhandled(err: GenericServiceError) -> Self {
        Self::Unhandled(err)
    }
}
