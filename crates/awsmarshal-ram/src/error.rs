//! RAM service errors.
//!
//! Every RAM error carries only a `message`; the code comes from the
//! `x-amzn-ErrorType` header or the `__type` key.

use awsmarshal_client::error_entry;
use awsmarshal_core::{ErrorEntry, GenericServiceError, ServiceError};
use awsmarshal_json::error_payload;
use serde::Deserialize;

/// Payload shared by every RAM error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamErrorDetail {
    /// Description.
    pub message: Option<String>,
}

/// Errors returned by RAM operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RamError {
    /// An ARN is not well formed.
    #[error("MalformedArnException: {}", .0.message.as_deref().unwrap_or_default())]
    MalformedArn(RamErrorDetail),
    /// A resource or share does not exist.
    #[error("UnknownResourceException: {}", .0.message.as_deref().unwrap_or_default())]
    UnknownResource(RamErrorDetail),
    /// A client token was reused with different parameters.
    #[error("IdempotentParameterMismatchException: {}", .0.message.as_deref().unwrap_or_default())]
    IdempotentParameterMismatch(RamErrorDetail),
    /// A client token is not valid.
    #[error("InvalidClientTokenException: {}", .0.message.as_deref().unwrap_or_default())]
    InvalidClientToken(RamErrorDetail),
    /// `maxResults` is out of range.
    #[error("InvalidMaxResultsException: {}", .0.message.as_deref().unwrap_or_default())]
    InvalidMaxResults(RamErrorDetail),
    /// `nextToken` is not valid.
    #[error("InvalidNextTokenException: {}", .0.message.as_deref().unwrap_or_default())]
    InvalidNextToken(RamErrorDetail),
    /// A parameter is not valid.
    #[error("InvalidParameterException: {}", .0.message.as_deref().unwrap_or_default())]
    InvalidParameter(RamErrorDetail),
    /// A resource type is not valid.
    #[error("InvalidResourceTypeException: {}", .0.message.as_deref().unwrap_or_default())]
    InvalidResourceType(RamErrorDetail),
    /// The share is not in a state that allows the change.
    #[error("InvalidStateTransitionException: {}", .0.message.as_deref().unwrap_or_default())]
    InvalidStateTransition(RamErrorDetail),
    /// A required parameter is missing.
    #[error("MissingRequiredParameterException: {}", .0.message.as_deref().unwrap_or_default())]
    MissingRequiredParameter(RamErrorDetail),
    /// The caller may not perform the operation.
    #[error("OperationNotPermittedException: {}", .0.message.as_deref().unwrap_or_default())]
    OperationNotPermitted(RamErrorDetail),
    /// A resource ARN was not found.
    #[error("ResourceArnNotFoundException: {}", .0.message.as_deref().unwrap_or_default())]
    ResourceArnNotFound(RamErrorDetail),
    /// Too many shares.
    #[error("ResourceShareLimitExceededException: {}", .0.message.as_deref().unwrap_or_default())]
    ResourceShareLimitExceeded(RamErrorDetail),
    /// The service failed.
    #[error("ServerInternalException: {}", .0.message.as_deref().unwrap_or_default())]
    ServerInternal(RamErrorDetail),
    /// The service is unavailable.
    #[error("ServiceUnavailableException: {}", .0.message.as_deref().unwrap_or_default())]
    ServiceUnavailable(RamErrorDetail),
    /// Too many tags.
    #[error("TagLimitExceededException: {}", .0.message.as_deref().unwrap_or_default())]
    TagLimitExceeded(RamErrorDetail),
    /// A tag violates the organization's tag policy.
    #[error("TagPolicyViolationException: {}", .0.message.as_deref().unwrap_or_default())]
    TagPolicyViolation(RamErrorDetail),
    /// Any code not listed above.
    #[error(transparent)]
    Unhandled(GenericServiceError),
}

static REGISTRY: &[ErrorEntry<RamError>] = &[
    error_entry!("MalformedArnException" => RamError::MalformedArn, error_payload),
    error_entry!("UnknownResourceException" => RamError::UnknownResource, error_payload),
    error_entry!("IdempotentParameterMismatchException" => RamError::IdempotentParameterMismatch, error_payload),
    error_entry!("InvalidClientTokenException" => RamError::InvalidClientToken, error_payload),
    error_entry!("InvalidMaxResultsException" => RamError::InvalidMaxResults, error_payload),
    error_entry!("InvalidNextTokenException" => RamError::InvalidNextToken, error_payload),
    error_entry!("InvalidParameterException" => RamError::InvalidParameter, error_payload),
    error_entry!("InvalidResourceTypeException" => RamError::InvalidResourceType, error_payload),
    error_entry!("InvalidStateTransitionException" => RamError::InvalidStateTransition, error_payload),
    error_entry!("MissingRequiredParameterException" => RamError::MissingRequiredParameter, error_payload),
    error_entry!("OperationNotPermittedException" => RamError::OperationNotPermitted, error_payload),
    error_entry!("ResourceArnNotFoundException" => RamError::ResourceArnNotFound, error_payload),
    error_entry!("ResourceShareLimitExceededException" => RamError::ResourceShareLimitExceeded, error_payload),
    error_entry!("ServerInternalException" => RamError::ServerInternal, error_payload),
    error_entry!("ServiceUnavailableException" => RamError::ServiceUnavailable, error_payload),
    error_entry!("TagLimitExceededException" => RamError::TagLimitExceeded, error_payload),
    error_entry!("TagPolicyViolationException" => RamError::TagPolicyViolation, error_payload),
];

impl ServiceError for RamError {
    fn registry() -> &'static [ErrorEntry<Self>] {
        REGISTRY
    }

    fn unhandled(err: GenericServiceError) -> Self {
        Self::Unhandled(err)
    }
}
