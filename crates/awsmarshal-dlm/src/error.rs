//! DLM service errors.

use awsmarshal_client::error_entry;
use awsmarshal_core::{ErrorEntry, GenericServiceError, ServiceError};
use awsmarshal_json::error_payload;
use serde::Deserialize;

/// A requested policy does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceNotFoundException {
    /// Description.
    pub message: Option<String>,
    /// Service sub-code.
    pub code: Option<String>,
    /// Kind of the missing resource.
    pub resource_type: Option<String>,
    /// Ids that were not found.
    pub resource_ids: Option<Vec<String>>,
}

/// Bad or inconsistent parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvalidRequestException {
    /// Description.
    pub message: Option<String>,
    /// Service sub-code.
    pub code: Option<String>,
    /// Parameters that were required but missing.
    pub required_parameters: Option<Vec<String>>,
    /// Parameters that cannot be combined.
    pub mutually_exclusive_parameters: Option<Vec<String>>,
}

/// A quota was exceeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LimitExceededException {
    /// Description.
    pub message: Option<String>,
    /// Service sub-code.
    pub code: Option<String>,
    /// Resource whose quota was hit.
    pub resource_type: Option<String>,
}

/// The service failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InternalServerException {
    /// Description.
    pub message: Option<String>,
    /// Service sub-code.
    pub code: Option<String>,
}

/// Errors returned by DLM operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DlmError {
    /// `ResourceNotFoundException`.
    #[error("ResourceNotFoundException: {}", .0.message.as_deref().unwrap_or_default())]
    ResourceNotFound(ResourceNotFoundException),
    /// `InvalidRequestException`.
    #[error("InvalidRequestException: {}", .0.message.as_deref().unwrap_or_default())]
    InvalidRequest(InvalidRequestException),
    /// `LimitExceededException`.
    #[error("LimitExceededException: {}", .0.message.as_deref().unwrap_or_default())]
    LimitExceeded(LimitExceededException),
    /// `InternalServerException`.
    #[error("InternalServerException: {}", .0.message.as_deref().unwrap_or_default())]
    InternalServer(InternalServerException),
    /// Any code not listed above.
    #[error(transparent)]
    Unhandled(GenericServiceError),
}

static REGISTRY: &[ErrorEntry<DlmError>] = &[
    error_entry!("ResourceNotFoundException" => DlmError::ResourceNotFound, error_payload),
    error_entry!("InvalidRequestException" => DlmError::InvalidRequest, error_payload),
    error_entry!("LimitExceededException" => DlmError::LimitExceeded, error_payload),
    error_entry!("InternalServerException" => DlmError::InternalServer, error_payload),
];

impl ServiceError for DlmError {
    fn registry() -> &'static [ErrorEntry<Self>] {
        REGISTRY
    }

    fn unhandled(err: GenericServiceError) -> Self {
        Self::Unhandled(err)
    }
}
