//! Blocking transport backed by `reqwest`.

use awsmarshal_core::{HttpTransport, RawResponse, TransportError};
use bytes::Bytes;
use tracing::debug;

/// Sends requests with a pooled `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's default settings.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| TransportError::Other(Box::new(e)))?;
        Ok(Self { client })
    }

    /// Wraps a preconfigured client (timeouts, proxies, TLS).
    #[must_use]
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

fn map_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(Box::new(err))
    } else if err.is_connect() {
        TransportError::Connect(Box::new(err))
    } else if err.is_body() || err.is_decode() {
        TransportError::Body(Box::new(err))
    } else {
        TransportError::Other(Box::new(err))
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: http::Request<Bytes>) -> Result<RawResponse, TransportError> {
        let (parts, body) = request.into_parts();
        debug!(method = %parts.method, uri = %parts.uri, "sending request");

        let response = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body.to_vec())
            .send()
            .map_err(map_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().map_err(map_error)?;
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
