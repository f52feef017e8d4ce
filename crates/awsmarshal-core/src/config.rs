//! Client configuration.
//!
//! Configuration is plain data; [`ClientConfig::from_env`] fills it from the
//! usual AWS environment variables.

use crate::types::AwsRegion;

/// Settings shared by every call a client makes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Region to address and sign for.
    pub region: AwsRegion,
    /// Overrides the service's default endpoint (scheme and authority).
    pub endpoint_url: Option<String>,
    /// Sends requests unsigned.
    pub skip_signing: bool,
}

impl ClientConfig {
    /// Creates a configuration for `region`.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: AwsRegion::new(region),
            ..Self::default()
        }
    }

    /// Sets the endpoint override.
    #[must_use]
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Enables or disables request signing.
    #[must_use]
    pub fn with_skip_signing(mut self, skip: bool) -> Self {
        self.skip_signing = skip;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `AWS_REGION` (falling back to `DEFAULT_REGION`),
    /// `AWS_ENDPOINT_URL` and `AWSMARSHAL_SKIP_SIGNING`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("AWS_REGION").or_else(|| lookup("DEFAULT_REGION")) {
            config.region = AwsRegion::new(v);
        }
        if let Some(v) = lookup("AWS_ENDPOINT_URL").filter(|v| !v.is_empty()) {
            config.endpoint_url = Some(v);
        }
        if let Some(v) = lookup("AWSMARSHAL_SKIP_SIGNING") {
            config.skip_signing = env_bool(&v);
        }

        config
    }
}

fn env_bool(v: &str) -> bool {
    matches!(v, "1" | "true" | "yes" | "TRUE" | "YES")
}
