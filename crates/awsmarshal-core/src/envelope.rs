//! Request envelope and raw response types.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use percent_encoding::utf8_percent_encode;

use crate::canonical::URI_ENCODE_SET;
use crate::error::MarshalError;

/// A marshalled request, ready to be addressed to an endpoint.
///
/// Envelopes are built once per call by an operation's marshaller and
/// consumed by [`Envelope::into_http_request`].
#[derive(Debug, Clone)]
pub struct Envelope {
    operation: &'static str,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
}

impl Envelope {
    /// Starts an envelope for the named operation (`POST /`, empty body).
    #[must_use]
    pub fn builder(operation: &'static str) -> EnvelopeBuilder {
        EnvelopeBuilder {
            envelope: Self {
                operation,
                method: Method::POST,
                path: "/".to_owned(),
                query: Vec::new(),
                headers: HeaderMap::new(),
                body: Bytes::new(),
            },
            error: None,
        }
    }

    /// Operation name.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Percent-encoded URI path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query-string parameters, unencoded, in insertion order.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Request body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the request target (`path?query`) with the query percent-encoded.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, URI_ENCODE_SET),
                    utf8_percent_encode(v, URI_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// Addresses the envelope to `endpoint` (scheme and authority, e.g.
    /// `https://dlm.us-east-1.amazonaws.com`).
    pub fn into_http_request(self, endpoint: &str) -> Result<http::Request<Bytes>, MarshalError> {
        let uri = format!("{}{}", endpoint.trim_end_matches('/'), self.path_and_query());
        let mut builder = http::Request::builder().method(self.method).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
        }
        Ok(builder.body(self.body)?)
    }
}

/// Builder for [`Envelope`].
///
/// Invalid header values are remembered and reported by [`build`](Self::build).
#[derive(Debug)]
pub struct EnvelopeBuilder {
    envelope: Envelope,
    error: Option<MarshalError>,
}

impl EnvelopeBuilder {
    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.envelope.method = method;
        self
    }

    /// Sets the already-encoded URI path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.envelope.path = path.into();
        self
    }

    /// Appends a query-string parameter.
    #[must_use]
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.envelope.query.push((name.into(), value.into()));
        self
    }

    /// Sets a header, replacing any previous value.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(v) => {
                self.envelope.headers.insert(name, v);
            }
            Err(e) => {
                self.error.get_or_insert(MarshalError::InvalidInput(format!(
                    "invalid value for header {name}: {e}"
                )));
            }
        }
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.envelope.body = body.into();
        self
    }

    /// Finishes the envelope.
    pub fn build(self) -> Result<Envelope, MarshalError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.envelope),
        }
    }
}

/// An HTTP response as handed back by the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Full response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Creates a response with no headers.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Adds a header. Invalid values are ignored.
    #[must_use]
    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(v) = HeaderValue::from_str(value) {
            self.headers.insert(HeaderName::from_static(name), v);
        }
        self
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns a header as text, if present and valid UTF-8.
    #[must_use]
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Request id from the `x-amzn-RequestId` or `x-amz-request-id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header_str("x-amzn-requestid")
            .or_else(|| self.header_str("x-amz-request-id"))
    }
}
