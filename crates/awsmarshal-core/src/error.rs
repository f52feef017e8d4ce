//! Error taxonomy shared by the marshalling pipeline.

use std::fmt;

/// Boxed error used as the source of codec and transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Wire format a codec error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// URL-encoded query parameters.
    Query,
    /// XML documents.
    Xml,
    /// JSON documents.
    Json,
}

impl WireFormat {
    /// Returns the lowercase name of the format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-side failure while turning a model into a request.
///
/// Nothing has been sent when this error is returned.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// A required member (URI label or required body field) is unset.
    #[error("missing required field `{field}` on {shape}")]
    MissingField {
        /// Shape that declares the field.
        shape: &'static str,
        /// Wire name of the field.
        field: &'static str,
    },

    /// The value cannot be expressed in the target wire format.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The underlying writer failed.
    #[error("failed to write {format} payload: {source}")]
    Serialize {
        /// Format being written.
        format: WireFormat,
        /// Writer error.
        #[source]
        source: BoxError,
    },

    /// The envelope could not be turned into an HTTP request.
    #[error("invalid HTTP request: {0}")]
    InvalidRequest(#[from] http::Error),
}

impl MarshalError {
    /// Wraps a writer error for the given format.
    pub fn serialize(format: WireFormat, source: impl Into<BoxError>) -> Self {
        Self::Serialize {
            format,
            source: source.into(),
        }
    }
}

impl serde::ser::Error for MarshalError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::InvalidInput(msg.to_string())
    }
}

/// Failure while decoding a wire payload into a model.
#[derive(Debug, thiserror::Error)]
pub enum UnmarshalError {
    /// The payload is not well formed or does not match the model.
    #[error("malformed {format} payload: {source}")]
    Malformed {
        /// Format being read.
        format: WireFormat,
        /// Parser error.
        #[source]
        source: BoxError,
    },

    /// An element the decoder needs is absent from the document.
    #[error("element <{element}> not found in {format} payload")]
    MissingElement {
        /// Format being read.
        format: WireFormat,
        /// Local name of the element.
        element: String,
    },
}

impl UnmarshalError {
    /// Wraps a parser error for the given format.
    pub fn malformed(format: WireFormat, source: impl Into<BoxError>) -> Self {
        Self::Malformed {
            format,
            source: source.into(),
        }
    }
}

/// Network level failure reported by an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] BoxError),

    /// The transport gave up waiting for a response.
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),

    /// A scripted transport ran out of responses.
    #[error("no scripted response left for {method} {uri}")]
    Exhausted {
        /// Method of the unanswered request.
        method: String,
        /// URI of the unanswered request.
        uri: String,
    },

    /// Any other transport failure.
    #[error("transport failure: {0}")]
    Other(#[source] BoxError),
}

/// Failure while resolving credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    /// A required credential variable is not set.
    #[error("credential variable {0} is not set")]
    MissingVariable(&'static str),

    /// The credentials are present but unusable.
    #[error("invalid credentials: {0}")]
    Invalid(String),
}

/// Failure while signing a request.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The request URI has no authority to sign as `host`.
    #[error("request URI has no host")]
    MissingHost,

    /// A computed header value is not a valid HTTP header value.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// The HMAC key could not be initialised.
    #[error("invalid signing key length")]
    InvalidKey,
}

/// Error returned by every client operation.
///
/// `E` is the service's own error enum; every other variant is a failure
/// that happened on the client side of the wire.
#[derive(Debug, thiserror::Error)]
pub enum SdkError<E> {
    /// The input could not be marshalled.
    #[error("failed to construct request: {0}")]
    Construction(#[from] MarshalError),

    /// Credentials could not be resolved.
    #[error("failed to resolve credentials: {0}")]
    Credentials(#[from] CredentialsError),

    /// The request could not be signed.
    #[error("failed to sign request: {0}")]
    Signing(#[from] SigningError),

    /// The transport failed before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A success response could not be decoded.
    #[error("failed to decode response: {0}")]
    Response(#[from] UnmarshalError),

    /// The service answered with an error payload.
    #[error(transparent)]
    Service(E),
}

impl<E> SdkError<E> {
    /// Returns the service error if the service rejected the call.
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Consumes the error, returning the service error if there is one.
    pub fn into_service_error(self) -> Option<E> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }
}
