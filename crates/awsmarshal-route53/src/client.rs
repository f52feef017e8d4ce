use awsmarshal_client::{BuildError, Client, ClientBuilder, ServiceMetadata};
use awsmarshal_core::{ClientConfig, SdkError, UriEncoding};

use crate::error::Route53Error;
use crate::input::{
    CreateHealthCheckInput, DeleteHealthCheckInput, GetHealthCheckCountInput,
    GetHealthCheckInput, ListHealthChecksInput, UpdateHealthCheckInput,
};
use crate::operation::{
    CreateHealthCheck, DeleteHealthCheck, GetHealthCheck, GetHealthCheckCount, ListHealthChecks,
    UpdateHealthCheck,
};
use crate::output::{
    CreateHealthCheckOutput, DeleteHealthCheckOutput, GetHealthCheckCountOutput,
    GetHealthCheckOutput, ListHealthChecksOutput, UpdateHealthCheckOutput,
};

/// Endpoint and signing facts for Route 53.
pub const SERVICE: ServiceMetadata = ServiceMetadata {
    endpoint_prefix: "route53",
    signing_name: "route53",
    global_endpoint: Some("https://route53.amazonaws.com"),
    uri_encoding: UriEncoding::Double,
};

type Result<T> = std::result::Result<T, SdkError<Route53Error>>;

/// Blocking Route 53 client. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Route53Client {
    inner: Client,
}

impl Route53Client {
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

    /// Creates a health check.
    pub fn create_health_check(
        &self,
        input: &CreateHealthCheckInput,
    ) -> Result<CreateHealthCheckOutput> {
        self.inner.invoke::<CreateHealthCheck>(input)
    }

    /// Gets one health check.
    pub fn get_health_check(&self, input: &GetHealthCheckInput) -> Result<GetHealthCheckOutput> {
        self.inner.invoke::<GetHealthCheck>(input)
    }

    /// Lists health checks, one page at a time.
    pub fn list_health_checks(
        &self,
        input: &ListHealthChecksInput,
    ) -> Result<ListHealthChecksOutput> {
        self.inner.invoke::<ListHealthChecks>(input)
    }

    /// Updates an existing health check.
    pub fn update_health_check(
        &self,
        input: &UpdateHealthCheckInput,
    ) -> Result<UpdateHealthCheckOutput> {
        self.inner.invoke::<UpdateHealthCheck>(input)
    }

    /// Deletes a health check.
    pub fn delete_health_check(
        &self,
        input: &DeleteHealthCheckInput,
    ) -> Result<DeleteHealthCheckOutput> {
        self.inner.invoke::<DeleteHealthCheck>(input)
    }

    /// Counts the health checks in the account.
    pub fn get_health_check_count(
        &self,
        input: &GetHealthCheckCountInput,
    ) -> Result<GetHealthCheckCountOutput> {
        self.inner.invoke::<GetHealthCheckCount>(input)
    }
}
