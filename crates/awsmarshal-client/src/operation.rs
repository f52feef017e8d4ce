//! The per-operation contract.

use awsmarshal_core::{Envelope, MarshalError, RawResponse, ServiceError, UnmarshalError};

use crate::protocol::Protocol;

/// One API operation of one service.
///
/// Implementors are zero-sized markers; all behaviour lives in associated
/// functions so an operation carries no state between calls.
pub trait Operation {
    /// Request model.
    type Input;
    /// Response model.
    type Output;
    /// The service's error enum.
    type Error: ServiceError;
    /// Wire protocol, used to read error responses.
    type Protocol: Protocol;

    /// Operation name as the service knows it.
    const NAME: &'static str;

    /// Builds the request envelope. Fails before anything is sent.
    fn marshall(input: &Self::Input) -> Result<Envelope, MarshalError>;

    /// Decodes a 2xx response.
    fn unmarshall(response: &RawResponse) -> Result<Self::Output, UnmarshalError>;
}
