//! Credential providers.

use std::fmt;

use crate::error::CredentialsError;

/// An access key pair, optionally with a session token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    /// Creates long-term credentials.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attaches a session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Access key id.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Secret access key.
    #[must_use]
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Session token, for temporary credentials.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

/// Source of credentials for each call.
///
/// Providers are shared across threads by the client and asked once per call.
pub trait CredentialProvider: Send + Sync + fmt::Debug {
    /// Returns the credentials to sign the next request with.
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
}

/// Always returns the same credentials.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credentials: Credentials,
}

impl StaticCredentialProvider {
    /// Creates a provider for a fixed key pair.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(access_key_id, secret_access_key),
        }
    }

    /// Creates a provider from existing credentials.
    #[must_use]
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.credentials.clone())
    }
}

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
/// from the process environment on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentCredentialProvider;

impl EnvironmentCredentialProvider {
    /// Creates the provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn resolve(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Credentials, CredentialsError> {
        let non_empty = |name| lookup(name).filter(|v: &String| !v.is_empty());
        let access_key_id = non_empty("AWS_ACCESS_KEY_ID")
            .ok_or(CredentialsError::MissingVariable("AWS_ACCESS_KEY_ID"))?;
        let secret_access_key = non_empty("AWS_SECRET_ACCESS_KEY")
            .ok_or(CredentialsError::MissingVariable("AWS_SECRET_ACCESS_KEY"))?;
        let credentials = Credentials::new(access_key_id, secret_access_key);
        Ok(match non_empty("AWS_SESSION_TOKEN") {
            Some(token) => credentials.with_session_token(token),
            None => credentials,
        })
    }
}

impl CredentialProvider for EnvironmentCredentialProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        Self::resolve(|name| std::env::var(name).ok())
    }
}
