//! Shared MediaPackage VOD shapes. Keys are `camelCase`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// CDN authorization settings of a packaging group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    /// Secrets Manager ARN of the CDN identifier secret. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn_identifier_secret: Option<String>,
    /// Role that may read the secret. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets_role_arn: Option<String>,
}

impl Authorization {
    /// Builds a fully populated value.
    #[must_use]
    pub fn new(cdn_identifier_secret: impl Into<String>, secrets_role_arn: impl Into<String>) -> Self {
        Self {
            cdn_identifier_secret: Some(cdn_identifier_secret.into()),
            secrets_role_arn: Some(secrets_role_arn.into()),
        }
    }
}

/// Where egress access logs go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EgressAccessLogs {
    /// CloudWatch Logs group. Defaults to `/aws/MediaPackage/VodEgressAccessLogs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
}

impl EgressAccessLogs {
    /// Sets `logGroupName`.
    #[must_use]
    pub fn with_log_group_name(mut self, name: impl Into<String>) -> Self {
        self.log_group_name = Some(name.into());
        self
    }
}

/// A packaging group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingGroup {
    /// Group ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Group id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Domain assets in this group are served from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// CDN authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Authorization>,
    /// Egress access logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress_access_logs: Option<EgressAccessLogs>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}
