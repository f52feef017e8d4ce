use awsmarshal_client::{BuildError, Client, ClientBuilder, ServiceMetadata};
use awsmarshal_core::{ClientConfig, SdkError, UriEncoding};

use crate::error::DlmError;
use crate::input::{
    CreateLifecyclePolicyInput, DeleteLifecyclePolicyInput, GetLifecyclePoliciesInput,
    GetLifecyclePolicyInput, UpdateLifecyclePolicyInput,
};
use crate::operation::{
    CreateLifecyclePolicy, DeleteLifecyclePolicy, GetLifecyclePolicies, GetLifecyclePolicy,
    UpdateLifecyclePolicy,
};
use crate::output::{
    CreateLifecyclePolicyOutput, DeleteLifecyclePolicyOutput, GetLifecyclePoliciesOutput,
    GetLifecyclePolicyOutput, UpdateLifecyclePolicyOutput,
};

/// Endpoint and signing facts for DLM.
pub const SERVICE: ServiceMetadata = ServiceMetadata {
    endpoint_prefix: "dlm",
    signing_name: "dlm",
    global_endpoint: None,
    uri_encoding: UriEncoding::Double,
};

type Result<T> = std::result::Result<T, SdkError<DlmError>>;

/// Blocking DLM client. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct DlmClient {
    inner: Client,
}

impl DlmClient {
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

    /// Creates a lifecycle policy.
    pub fn create_lifecycle_policy(
        &self,
        input: &CreateLifecyclePolicyInput,
    ) -> Result<CreateLifecyclePolicyOutput> {
        self.inner.invoke::<CreateLifecyclePolicy>(input)
    }

    /// Gets one lifecycle policy.
    pub fn get_lifecycle_policy(
        &self,
        input: &GetLifecyclePolicyInput,
    ) -> Result<GetLifecyclePolicyOutput> {
        self.inner.invoke::<GetLifecyclePolicy>(input)
    }

    /// Lists policy summaries matching the filters.
    pub fn get_lifecycle_policies(
        &self,
        input: &GetLifecyclePoliciesInput,
    ) -> Result<GetLifecyclePoliciesOutput> {
        self.inner.invoke::<GetLifecyclePolicies>(input)
    }

    /// Updates a lifecycle policy.
    pub fn update_lifecycle_policy(
        &self,
        input: &UpdateLifecyclePolicyInput,
    ) -> Result<UpdateLifecyclePolicyOutput> {
        self.inner.invoke::<UpdateLifecyclePolicy>(input)
    }

    /// Deletes a lifecycle policy.
    pub fn delete_lifecycle_policy(
        &self,
        input: &DeleteLifecyclePolicyInput,
    ) -> Result<DeleteLifecyclePolicyOutput> {
        self.inner.invoke::<DeleteLifecyclePolicy>(input)
    }
}
