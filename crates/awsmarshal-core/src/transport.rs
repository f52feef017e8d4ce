//! Blocking HTTP transport contract.

use std::fmt;

use bytes::Bytes;

use crate::envelope::RawResponse;
use crate::error::TransportError;

/// Sends a signed request and waits for the full response.
///
/// Timeouts and connection reuse belong to the implementation.
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Executes `request`, blocking the calling thread until the response
    /// body has been read.
    fn execute(&self, request: http::Request<Bytes>) -> Result<RawResponse, TransportError>;
}
