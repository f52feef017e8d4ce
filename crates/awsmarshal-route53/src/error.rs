//! Route 53 service errors.
//!
//! Errors arrive as XML documents:
//!
//! ```xml
//! <ErrorResponse>
//!   <Error><Type>Sender</Type><Code>NoSuchHealthCheck</Code><Message>...</Message></Error>
//!   <RequestId>...</RequestId>
//! </ErrorResponse>
//! ```

use awsmarshal_client::error_entry;
use awsmarshal_core::{ErrorEntry, GenericServiceError, ServiceError};
use serde::Deserialize;

macro_rules! payload {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
            #[serde(rename_all = "PascalCase")]
            pub struct $name {
                /// Human-readable description.
                pub message: Option<String>,
            }
        )+
    };
}

payload! {
    /// No health check with the given id exists.
    NoSuchHealthCheck,
    /// A health check with the same caller reference but different settings exists.
    HealthCheckAlreadyExists,
    /// The input is not valid.
    InvalidInput,
    /// The health check is still referenced by a record.
    HealthCheckInUse,
    /// The supplied `HealthCheckVersion` is not the current one.
    HealthCheckVersionMismatch,
    /// The account has reached its health-check quota.
    TooManyHealthChecks,
    /// Another request changed the resource concurrently.
    PriorRequestNotComplete,
}

/// Errors returned by Route 53 health-check operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Route53Error {
    /// `NoSuchHealthCheck`.
    #[error("NoSuchHealthCheck: {}", .0.message.as_deref().unwrap_or_default())]
    NoSuchHealthCheck(NoSuchHealthCheck),
    /// `HealthCheckAlreadyExists`.
    #[error("HealthCheckAlreadyExists: {}", .0.message.as_deref().unwrap_or_default())]
    HealthCheckAlreadyExists(HealthCheckAlreadyExists),
    /// `InvalidInput`.
    #[error("InvalidInput: {}", .0.message.as_deref().unwrap_or_default())]
    InvalidInput(InvalidInput),
    /// `HealthCheckInUse`.
    #[error("HealthCheckInUse: {}", .0.message.as_deref().unwrap_or_default())]
    HealthCheckInUse(HealthCheckInUse),
    /// `HealthCheckVersionMismatch`.
    #[error("HealthCheckVersionMismatch: {}", .0.message.as_deref().unwrap_or_default())]
    HealthCheckVersionMismatch(HealthCheckVersionMismatch),
    /// `TooManyHealthChecks`.
    #[error("TooManyHealthChecks: {}", .0.message.as_deref().unwrap_or_default())]
    TooManyHealthChecks(TooManyHealthChecks),
    /// `PriorRequestNotComplete`.
    #[error("PriorRequestNotComplete: {}", .0.message.as_deref().unwrap_or_default())]
    PriorRequestNotComplete(PriorRequestNotComplete),
    /// Any code not listed above.
    #[error(transparent)]
    Unhandled(GenericServiceError),
}

static REGISTRY: &[ErrorEntry<Route53Error>] = &[
    error_entry!("NoSuchHealthCheck" => Route53Error::NoSuchHealthCheck, awsmarshal_xml::error_payload),
    error_entry!("HealthCheckAlreadyExists" => Route53Error::HealthCheckAlreadyExists, awsmarshal_xml::error_payload),
    error_entry!("InvalidInput" => Route53Error::InvalidInput, awsmarshal_xml::error_payload),
    error_entry!("HealthCheckInUse" => Route53Error::HealthCheckInUse, awsmarshal_xml::error_payload),
    error_entry!("HealthCheckVersionMismatch" => Route53Error::HealthCheckVersionMismatch, awsmarshal_xml::error_payload),
    error_entry!("TooManyHealthChecks" => Route53Error::TooManyHealthChecks, awsmarshal_xml::error_payload),
    error_entry!("PriorRequestNotComplete" => Route53Error::PriorRequestNotComplete, awsmarshal_xml::error_payload),
];

impl ServiceError for Route53Error {
    fn registry() -> &'static [ErrorEntry<Self>] {
        REGISTRY
    }

    fn unhandled(err: GenericServiceError) -> Self {
        Self::Unhandled(err)
    }
}

impl Route53Error {
    /// Wire error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NoSuchHealthCheck(_) => "NoSuchHealthCheck",
            Self::HealthCheckAlreadyExists(_) => "HealthCheckAlreadyExists",
            Self::InvalidInput(_) => "InvalidInput",
            Self::HealthCheckInUse(_) => "HealthCheckInUse",
            Self::HealthCheckVersionMismatch(_) => "HealthCheckVersionMismatch",
            Self::TooManyHealthChecks(_) => "TooManyHealthChecks",
            Self::PriorRequestNotComplete(_) => "PriorRequestNotComplete",
            Self::Unhandled(e) => &e.code,
        }
    }
}
