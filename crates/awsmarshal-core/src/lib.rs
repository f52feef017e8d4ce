//! Core building blocks shared by every awsmarshal protocol and service crate.
//!
//! This crate holds the pieces that do not depend on a particular wire format:
//! the timestamp and blob primitives every model uses, the scalar codec table
//! the query and XML writers share, the request [`Envelope`] and
//! [`RawResponse`], the error taxonomy, the service error registry, and the
//! collaborators a client needs to send a request (credentials, a signer and a
//! blocking transport).

pub mod canonical;
mod config;
mod credentials;
mod envelope;
mod error;
mod macros;
mod primitives;
mod service_error;
pub mod signer;
mod transport;
mod types;
pub mod wire;

pub use canonical::UriEncoding;
pub use config::ClientConfig;
pub use credentials::{
    CredentialProvider, Credentials, EnvironmentCredentialProvider, StaticCredentialProvider,
};
pub use envelope::{Envelope, EnvelopeBuilder, RawResponse};
pub use error::{
    BoxError, CredentialsError, MarshalError, SdkError, SigningError, TransportError,
    UnmarshalError, WireFormat,
};
pub use primitives::{Blob, TIMESTAMP_TOKEN, Timestamp};
pub use service_error::{
    ErrorEntry, ErrorResponse, GenericServiceError, ServiceError, decode_service_error,
};
pub use signer::{NoopSigner, RequestSigner, SigV4Signer, SigningScope};
pub use transport::HttpTransport;
pub use types::AwsRegion;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
