//! Client runtime for awsmarshal service crates.
//!
//! A service crate describes each API call as an [`Operation`]: how to
//! marshal its input into an [`Envelope`](awsmarshal_core::Envelope) and how
//! to unmarshal a success response. [`Client::invoke`] runs the pipeline:
//!
//! ```text
//! marshall -> credentials -> http::Request -> sign -> transport -> unmarshall | error registry
//! ```
//!
//! The pipeline is blocking and holds no per-call state, so one [`Client`]
//! can be shared by any number of threads.

mod client;
mod operation;
pub mod protocol;
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
#[cfg(feature = "reqwest")]
mod transport;

pub use client::{
    BuildError, Client, ClientBuilder, DEFAULT_USER_AGENT, INVOCATION_ID_HEADER, RequestOptions,
    ServiceMetadata,
};
pub use operation::Operation;
pub use protocol::{AwsJson, AwsQuery, Protocol};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;

/// Builds an [`ErrorEntry`](awsmarshal_core::ErrorEntry) that decodes a
/// payload with `$decode` and wraps it in `$variant`.
///
/// ```ignore
/// error_entry!("NoSuchHealthCheck" => Route53Error::NoSuchHealthCheck, awsmarshal_xml::error_payload)
/// ```
#[macro_export]
macro_rules! error_entry {
    ($code:literal => $variant:path, $decode:path) => {
        $crate::__private::ErrorEntry {
            code: $code,
            decode: |resp| $decode(resp).map($variant),
        }
    };
}

#[doc(hidden)]
pub mod __private {
    pub use awsmarshal_core::ErrorEntry;
}
