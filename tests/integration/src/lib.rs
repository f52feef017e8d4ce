//! End-to-end tests for the service clients.
//!
//! Every test builds a real client whose transport is a
//! [`StaticReplayTransport`]: responses are scripted, requests are captured,
//! and nothing touches the network.
//!
//! ```text
//! cargo test -p awsmarshal-integration
//! ```

use std::sync::Once;

use awsmarshal_client::test_util::StaticReplayTransport;
use awsmarshal_client::{Client, ClientBuilder};
use awsmarshal_core::{ClientConfig, RawResponse, StaticCredentialProvider};
use http::StatusCode;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Builds a service client in `region` wired to a fresh replay transport.
///
/// `builder` and `wrap` are the facade's `builder` and `from_client`
/// associated functions.
pub fn replay_client<C>(
    region: &str,
    builder: impl FnOnce(ClientConfig) -> ClientBuilder,
    wrap: impl FnOnce(Client) -> C,
) -> anyhow::Result<(C, StaticReplayTransport)> {
    init_tracing();

    let transport = StaticReplayTransport::new();
    let client = builder(ClientConfig::new(region))
        .credentials_provider(StaticCredentialProvider::new("AKIDEXAMPLE", "test-secret"))
        .transport(transport.clone())
        .build()?;
    Ok((wrap(client), transport))
}

/// A JSON response with the given status.
#[must_use]
pub fn json_response(status: StatusCode, body: &str) -> RawResponse {
    RawResponse::new(status, body.to_owned()).with_header("content-type", "application/json")
}

/// An XML response with the given status.
#[must_use]
pub fn xml_response(status: StatusCode, body: &str) -> RawResponse {
    RawResponse::new(status, body.to_owned()).with_header("content-type", "text/xml")
}

mod test_concurrency;
mod test_dlm;
mod test_mediapackagevod;
mod test_ram;
mod test_route53;
mod test_synthetics;
