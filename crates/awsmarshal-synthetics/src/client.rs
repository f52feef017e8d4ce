use awsmarshal_client::{BuildError, Client, ClientBuilder, ServiceMetadata};
use awsmarshal_core::{ClientConfig, SdkError, UriEncoding};

use crate::error::SyntheticsError;
use crate::input::{
    CreateCanaryInput, DeleteCanaryInput, DescribeCanariesInput, GetCanaryInput,
    StartCanaryInput, StopCanaryInput,
};
use crate::operation::{
    CreateCanary, DeleteCanary, DescribeCanaries, GetCanary, StartCanary, StopCanary,
};
use crate::output::{
    CreateCanaryOutput, DeleteCanaryOutput, DescribeCanariesOutput, GetCanaryOutput,
    StartCanaryOutput, StopCanaryOutput,
};

/// Endpoint and signing facts for Synthetics.
pub const SERVICE: ServiceMetadata = ServiceMetadata {
    endpoint_prefix: "synthetics",
    signing_name: "synthetics",
    global_endpoint: None,
    uri_encoding: UriEncoding::Double,
};

type Result<T> = std::result::Result<T, SdkError<SyntheticsError>>;

/// Blocking Synthetics client. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct SyntheticsClient {
    inner: Client,
}

impl SyntheticsClient {
    /// Creates a client with default credentials, signer and transport.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, BuildError> {
        Self::builder(config).build().map(Self::from_client)
    }

    /// Starts a builder to override credentials, signer or transport.
    #[must_use]
    pub fn builder(config: ClientConfig) -> ClientBuilder {
        Client::builder(SERVICE, config)
    }

    /// Wraps a client built with [`builder`](Self::builder).
    #[must_use]
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }

    /// The shared client underneath, for calls made with
    /// [`Client::invoke_with`].
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.inner
    }

    /// Creates a canary.
    pub fn create_canary(&self, input: &CreateCanaryInput) -> Result<CreateCanaryOutput> {
        self.inner.invoke::<CreateCanary>(input)
    }

    /// Fetches one canary by name.
    pub fn get_canary(&self, input: &GetCanaryInput) -> Result<GetCanaryOutput> {
        self.inner.invoke::<GetCanary>(input)
    }

    /// Lists canaries, one page at a time.
    pub fn describe_canaries(&self, input: &DescribeCanariesInput) -> Result<DescribeCanariesOutput> {
        self.inner.invoke::<DescribeCanaries>(input)
    }

    /// Starts a canary on its schedule.
    pub fn start_canary(&self, input: &StartCanaryInput) -> Result<StartCanaryOutput> {
        self.inner.invoke::<StartCanary>(input)
    }

    /// Stops a canary.
    pub fn stop_canary(&self, input: &StopCanaryInput) -> Result<StopCanaryOutput> {
        self.inner.invoke::<StopCanary>(input)
    }

    /// Deletes a canary.
    pub fn delete_canary(&self, input: &DeleteCanaryInput) -> Result<DeleteCanaryOutput> {
        self.inner.invoke::<DeleteCanary>(input)
    }
}

#[cfg(test)]
mod tests {
    use awsmarshal_client::test_util::StaticReplayTransport;
    use awsmarshal_core::{RawResponse, StaticCredentialProvider};
    use http::StatusCode;

    use super::*;

    #[test]
    fn test_should_route_start_to_regional_endpoint() {
        let transport = StaticReplayTransport::new();
        transport.push_response(RawResponse::new(StatusCode::OK, "{}"));
        let client = SyntheticsClient::from_client(
            SyntheticsClient::builder(ClientConfig::new("eu-west-1"))
                .credentials_provider(StaticCredentialProvider::new("AKID", "SECRET"))
                .transport(transport.clone())
                .build()
                .unwrap(),
        );
        client
            .start_canary(&StartCanaryInput::default().with_name("homepage"))
            .unwrap();
        let requests = transport.requests();
        assert_eq!(requests[0].uri, "https://synthetics.eu-west-1.amazonaws.com/canary/homepage/start");
        assert!(
            requests[0]
                .header("authorization")
                .unwrap()
                .contains("/eu-west-1/synthetics/aws4_request")
        );
    }
}
