use awsmarshal_client::{BuildError, Client, ClientBuilder, ServiceMetadata};
use awsmarshal_core::{ClientConfig, SdkError, UriEncoding};

use crate::error::RamError;
use crate::input::{
    AssociateResourceShareInput, CreateResourceShareInput, DeleteResourceShareInput,
    GetResourceSharesInput, ListResourcesInput, TagResourceInput,
};
use crate::operation::{
    AssociateResourceShare, CreateResourceShare, DeleteResourceShare, GetResourceShares,
    ListResources, TagResource,
};
use crate::output::{
    AssociateResourceShareOutput, CreateResourceShareOutput, DeleteResourceShareOutput,
    GetResourceSharesOutput, ListResourcesOutput, TagResourceOutput,
};

/// Endpoint and signing facts for RAM.
pub const SERVICE: ServiceMetadata = ServiceMetadata {
    endpoint_prefix: "ram",
    signing_name: "ram",
    global_endpoint: None,
    uri_encoding: UriEncoding::Double,
};

type Result<T> = std::result::Result<T, SdkError<RamError>>;

/// Blocking RAM client. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct RamClient {
    inner: Client,
}

impl RamClient {
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

    /// Creates a resource share.
    pub fn create_resource_share(
        &self,
        input: &CreateResourceShareInput,
    ) -> Result<CreateResourceShareOutput> {
        self.inner.invoke::<CreateResourceShare>(input)
    }

    /// Lists resource shares.
    pub fn get_resource_shares(
        &self,
        input: &GetResourceSharesInput,
    ) -> Result<GetResourceSharesOutput> {
        self.inner.invoke::<GetResourceShares>(input)
    }

    /// Adds resources or principals to a share.
    pub fn associate_resource_share(
        &self,
        input: &AssociateResourceShareInput,
    ) -> Result<AssociateResourceShareOutput> {
        self.inner.invoke::<AssociateResourceShare>(input)
    }

    /// Deletes a resource share.
    pub fn delete_resource_share(
        &self,
        input: &DeleteResourceShareInput,
    ) -> Result<DeleteResourceShareOutput> {
        self.inner.invoke::<DeleteResourceShare>(input)
    }

    /// Lists shared resources.
    pub fn list_resources(&self, input: &ListResourcesInput) -> Result<ListResourcesOutput> {
        self.inner.invoke::<ListResources>(input)
    }

    /// Tags a resource share.
    pub fn tag_resource(&self, input: &TagResourceInput) -> Result<TagResourceOutput> {
        self.inner.invoke::<TagResource>(input)
    }
}
