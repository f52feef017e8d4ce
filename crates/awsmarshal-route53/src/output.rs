//! Route 53 operation outputs.

use serde::{Deserialize, Serialize};

use crate::types::HealthCheck;

/// Output of `CreateHealthCheck`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHealthCheckOutput {
    /// The new check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    /// URL of the new check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Output of `GetHealthCheck`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetHealthCheckOutput {
    /// The requested check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
}

/// Output of `ListHealthChecks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHealthChecksOutput {
    /// One page of checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_checks: Option<Vec<HealthCheck>>,
    /// Marker echoed from the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Whether more pages follow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    /// Marker of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Page size applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<String>,
}

/// Output of `UpdateHealthCheck`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateHealthCheckOutput {
    /// The check after the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
}

/// Output of `DeleteHealthCheck`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteHealthCheckOutput {}

/// Output of `GetHealthCheckCount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetHealthCheckCountOutput {
    /// Number of health checks in the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_count: Option<i64>,
}
