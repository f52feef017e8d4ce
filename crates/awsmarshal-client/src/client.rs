//! The shared client and its invoke pipeline.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use awsmarshal_core::{
    AwsRegion, ClientConfig, CredentialProvider, Credentials, CredentialsError,
    EnvironmentCredentialProvider,
    HttpTransport, RawResponse, RequestSigner, SdkError, ServiceError, SigV4Signer, SigningScope,
    TransportError, UriEncoding,
};
use chrono::Utc;
use http::HeaderValue;
use http::header::{HeaderName, USER_AGENT};
use tracing::{debug, field, info_span, warn};
use uuid::Uuid;

use crate::operation::Operation;
use crate::protocol::Protocol;

/// Header carrying a fresh id for every invocation.
pub const INVOCATION_ID_HEADER: HeaderName = HeaderName::from_static("amz-sdk-invocation-id");

/// `User-Agent` sent when the builder is not given one.
pub const DEFAULT_USER_AGENT: &str = concat!("awsmarshal/", env!("CARGO_PKG_VERSION"));

/// Static facts about a service that the pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Host prefix, as in `{prefix}.{region}.amazonaws.com`.
    pub endpoint_prefix: &'static str,
    /// Service name in the SigV4 credential scope.
    pub signing_name: &'static str,
    /// Partition-wide endpoint for global services. Requests to it are
    /// signed for `us-east-1`.
    pub global_endpoint: Option<&'static str>,
    /// Path encoding of the canonical request.
    pub uri_encoding: UriEncoding,
}

impl ServiceMetadata {
    /// Resolves the endpoint: explicit override, then the global endpoint,
    /// then the regional one.
    #[must_use]
    pub fn resolve_endpoint(&self, config: &ClientConfig) -> String {
        if let Some(url) = &config.endpoint_url {
            return url.clone();
        }
        match self.global_endpoint {
            Some(global) => global.to_owned(),
            None => config.region.endpoint_for(self.endpoint_prefix),
        }
    }

    /// Region used in the credential scope.
    #[must_use]
    pub fn signing_region(&self, config: &ClientConfig) -> AwsRegion {
        if self.global_endpoint.is_some() {
            AwsRegion::new(AwsRegion::DEFAULT)
        } else {
            config.region.clone()
        }
    }
}

/// Failure while assembling a [`Client`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// No transport was supplied and no default transport is compiled in.
    #[error("no HTTP transport configured")]
    MissingTransport,

    /// The default transport could not be created.
    #[error("failed to create HTTP transport: {0}")]
    Transport(#[from] TransportError),

    /// The configured `User-Agent` is not a valid header value.
    #[error("invalid user agent: {0:?}")]
    InvalidUserAgent(String),
}

/// Settings for a single call that take precedence over the client's.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    credentials: Option<Credentials>,
}

impl RequestOptions {
    /// Options that change nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs this call with `credentials` instead of asking the provider.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Credentials overriding the client's provider, if any.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

struct Inner {
    metadata: ServiceMetadata,
    config: ClientConfig,
    endpoint: String,
    signing_region: AwsRegion,
    user_agent: HeaderValue,
    credentials: Arc<dyn CredentialProvider>,
    signer: Arc<dyn RequestSigner>,
    transport: Arc<dyn HttpTransport>,
}

/// A configured, thread-safe service client.
///
/// Cloning is cheap; clones share configuration and transport.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("service", &self.inner.metadata.signing_name)
            .field("endpoint", &self.inner.endpoint)
            .field("region", &self.inner.config.region)
            .field("user_agent", &self.inner.user_agent)
            .field("skip_signing", &self.inner.config.skip_signing)
            .field("transport", &self.inner.transport)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Starts a builder for `metadata` with the given configuration.
    #[must_use]
    pub fn builder(metadata: ServiceMetadata, config: ClientConfig) -> ClientBuilder {
        ClientBuilder {
            metadata,
            config,
            user_agent: None,
            credentials: None,
            signer: None,
            transport: None,
        }
    }

    /// Resolved endpoint of this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Configuration the client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Service metadata of this client.
    #[must_use]
    pub fn metadata(&self) -> &ServiceMetadata {
        &self.inner.metadata
    }

    /// `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.inner.user_agent.to_str().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Runs one operation end to end with the client's own settings.
    ///
    /// Nothing is sent when marshalling, credential resolution or signing
    /// fails. A non-2xx response is decoded through the service's error
    /// registry and returned as [`SdkError::Service`].
    pub fn invoke<O: Operation>(
        &self,
        input: &O::Input,
    ) -> Result<O::Output, SdkError<O::Error>> {
        self.invoke_with::<O>(input, &RequestOptions::default())
    }

    /// Runs one operation end to end, applying `options` to this call only.
    ///
    /// The call runs inside an `invoke` span whose `elapsed_ms` field holds
    /// the wall time of the whole call once it returns.
    pub fn invoke_with<O: Operation>(
        &self,
        input: &O::Input,
        options: &RequestOptions,
    ) -> Result<O::Output, SdkError<O::Error>> {
        let invocation_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "invoke",
            service = self.inner.metadata.signing_name,
            operation = O::NAME,
            invocation_id = %invocation_id,
            elapsed_ms = field::Empty,
        );
        let _entered = span.enter();

        let started = Instant::now();
        let result = self.execute::<O>(input, options, &invocation_id);
        let elapsed_ms = millis(started.elapsed());
        span.record("elapsed_ms", elapsed_ms);
        debug!(elapsed_ms, success = result.is_ok(), "call finished");
        result
    }

    fn execute<O: Operation>(
        &self,
        input: &O::Input,
        options: &RequestOptions,
        invocation_id: &str,
    ) -> Result<O::Output, SdkError<O::Error>> {
        let inner = &*self.inner;
        let envelope = O::marshall(input)?;
        debug!(
            method = %envelope.method(),
            path = envelope.path(),
            body_len = envelope.body().len(),
            "marshalled request"
        );

        let mut request = envelope.into_http_request(&inner.endpoint)?;
        let headers = request.headers_mut();
        headers.insert(USER_AGENT, inner.user_agent.clone());
        if let Ok(value) = HeaderValue::from_str(invocation_id) {
            headers.insert(INVOCATION_ID_HEADER, value);
        }

        if inner.config.skip_signing {
            debug!("request signing disabled");
        } else {
            let credentials = self.resolve_credentials(options)?;
            let scope = SigningScope {
                region: inner.signing_region.clone(),
                service: inner.metadata.signing_name.to_owned(),
                time: Utc::now(),
                uri_encoding: inner.metadata.uri_encoding,
            };
            inner.signer.sign(&mut request, &credentials, &scope)?;
        }

        let raw = inner.transport.execute(request)?;
        debug!(
            status = %raw.status,
            request_id = raw.request_id().unwrap_or("-"),
            "received response"
        );

        if raw.is_success() {
            return Ok(O::unmarshall(&raw)?);
        }
        Err(SdkError::Service(Self::service_error::<O>(&raw)))
    }

    fn resolve_credentials(
        &self,
        options: &RequestOptions,
    ) -> Result<Credentials, CredentialsError> {
        let started = Instant::now();
        let (credentials, source) = match options.credentials() {
            Some(credentials) => (credentials.clone(), "request"),
            None => (self.inner.credentials.provide_credentials()?, "provider"),
        };
        debug!(
            source,
            credentials_ms = millis(started.elapsed()),
            "resolved credentials"
        );
        Ok(credentials)
    }

    fn service_error<O: Operation>(raw: &RawResponse) -> O::Error {
        let resp = O::Protocol::error_response(raw);
        warn!(
            operation = O::NAME,
            status = %resp.status,
            code = %resp.code,
            request_id = resp.request_id.as_deref().unwrap_or("-"),
            "service returned an error"
        );
        O::Error::from_response(&resp)
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Builder for [`Client`].
///
/// Unset pieces get defaults: credentials from the environment, SigV4
/// signing, [`DEFAULT_USER_AGENT`] and, with the `reqwest` feature, a
/// blocking reqwest transport.
pub struct ClientBuilder {
    metadata: ServiceMetadata,
    config: ClientConfig,
    user_agent: Option<String>,
    credentials: Option<Arc<dyn CredentialProvider>>,
    signer: Option<Arc<dyn RequestSigner>>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("metadata", &self.metadata)
            .field("config", &self.config)
            .field("user_agent", &self.user_agent)
            .field("credentials", &self.credentials)
            .field("signer", &self.signer)
            .field("transport", &self.transport)
            .finish()
    }
}

impl ClientBuilder {
    /// Uses `provider` to resolve credentials for every call.
    #[must_use]
    pub fn credentials_provider(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.credentials = Some(Arc::new(provider));
        self
    }

    /// Replaces the request signer.
    #[must_use]
    pub fn signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    /// Sends `user_agent` as the `User-Agent` of every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replaces the HTTP transport.
    #[must_use]
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Shares an existing transport between clients.
    #[must_use]
    pub fn shared_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Finishes the client.
    pub fn build(self) -> Result<Client, BuildError> {
        let user_agent = match self.user_agent {
            Some(value) => {
                HeaderValue::from_str(&value).map_err(|_| BuildError::InvalidUserAgent(value))?
            }
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };
        let endpoint = self.metadata.resolve_endpoint(&self.config);
        let signing_region = self.metadata.signing_region(&self.config);
        debug!(
            service = self.metadata.signing_name,
            endpoint = %endpoint,
            region = %signing_region,
            user_agent = ?user_agent,
            "built client"
        );

        Ok(Client {
            inner: Arc::new(Inner {
                metadata: self.metadata,
                endpoint,
                signing_region,
                user_agent,
                config: self.config,
                credentials: self
                    .credentials
                    .unwrap_or_else(|| Arc::new(EnvironmentCredentialProvider::new())),
                signer: self.signer.unwrap_or_else(|| Arc::new(SigV4Signer)),
                transport,
            }),
        })
    }
}

#[cfg(feature = "reqwest")]
fn default_transport() -> Result<Arc<dyn HttpTransport>, BuildError> {
    Ok(Arc::new(crate::transport::ReqwestTransport::new()?))
}

#[cfg(not(feature = "reqwest"))]
fn default_transport() -> Result<Arc<dyn HttpTransport>, BuildError> {
    Err(BuildError::MissingTransport)
}
