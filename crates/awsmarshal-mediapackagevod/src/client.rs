use awsmarshal_client::{BuildError, Client, ClientBuilder, ServiceMetadata};
use awsmarshal_core::{ClientConfig, SdkError, UriEncoding};

use crate::error::MediaPackageVodError;
use crate::input::{
    CreatePackagingGroupInput, DeletePackagingGroupInput, DescribePackagingGroupInput,
    ListPackagingGroupsInput,
};
use crate::operation::{
    CreatePackagingGroup, DeletePackagingGroup, DescribePackagingGroup, ListPackagingGroups,
};
use crate::output::{
    CreatePackagingGroupOutput, DeletePackagingGroupOutput, DescribePackagingGroupOutput,
    ListPackagingGroupsOutput,
};

/// Endpoint and signing facts for MediaPackage VOD.
pub const SERVICE: ServiceMetadata = ServiceMetadata {
    endpoint_prefix: "mediapackage-vod",
    signing_name: "mediapackage-vod",
    global_endpoint: None,
    uri_encoding: UriEncoding::Double,
};

type Result<T> = std::result::Result<T, SdkError<MediaPackageVodError>>;

/// Blocking MediaPackage VOD client. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct MediaPackageVodClient {
    inner: Client,
}

impl MediaPackageVodClient {
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

    /// Creates a packaging group.
    pub fn create_packaging_group(
        &self,
        input: &CreatePackagingGroupInput,
    ) -> Result<CreatePackagingGroupOutput> {
        self.inner.invoke::<CreatePackagingGroup>(input)
    }

    /// Fetches one packaging group.
    pub fn describe_packaging_group(
        &self,
        input: &DescribePackagingGroupInput,
    ) -> Result<DescribePackagingGroupOutput> {
        self.inner.invoke::<DescribePackagingGroup>(input)
    }

    /// Lists packaging groups, one page at a time.
    pub fn list_packaging_groups(
        &self,
        input: &ListPackagingGroupsInput,
    ) -> Result<ListPackagingGroupsOutput> {
        self.inner.invoke::<ListPackagingGroups>(input)
    }

    /// Deletes a packaging group.
    pub fn delete_packaging_group(
        &self,
        input: &DeletePackagingGroupInput,
    ) -> Result<DeletePackagingGroupOutput> {
        self.inner.invoke::<DeletePackagingGroup>(input)
    }
}
