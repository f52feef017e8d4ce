//! Route 53 operation inputs.

use serde::{Deserialize, Serialize};

use crate::types::{
    AlarmIdentifier, HealthCheckConfig, InsufficientDataHealthStatus, ResettableElementName,
};

/// Input of `CreateHealthCheck`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHealthCheckInput {
    /// Unique string that makes retried creates idempotent. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_reference: Option<String>,
    /// Settings of the new check. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_config: Option<HealthCheckConfig>,
}

impl CreateHealthCheckInput {
    /// Sets `CallerReference`.
    #[must_use]
    pub fn with_caller_reference(mut self, reference: impl Into<String>) -> Self {
        self.caller_reference = Some(reference.into());
        self
    }

    /// Sets `HealthCheckConfig`.
    #[must_use]
    pub fn with_health_check_config(mut self, config: HealthCheckConfig) -> Self {
        self.health_check_config = Some(config);
        self
    }
}

/// Input of `GetHealthCheck`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetHealthCheckInput {
    /// Id of the check. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
}

impl GetHealthCheckInput {
    /// Sets `HealthCheckId`.
    #[must_use]
    pub fn with_health_check_id(mut self, id: impl Into<String>) -> Self {
        self.health_check_id = Some(id.into());
        self
    }
}

/// Input of `ListHealthChecks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHealthChecksInput {
    /// `NextMarker` of the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Page size, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<String>,
}

impl ListHealthChecksInput {
    /// Sets `Marker`.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Sets `MaxItems`.
    #[must_use]
    pub fn with_max_items(mut self, max_items: u32) -> Self {
        self.max_items = Some(max_items.to_string());
        self
    }
}

/// Input of `UpdateHealthCheck`.
///
/// Only set members are changed. Members named in `ResetElements` return to
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateHealthCheckInput {
    /// Id of the check. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
    /// Expected current version; a mismatch fails the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_version: Option<i64>,
    /// New endpoint address.
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// New port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// New resource path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_path: Option<String>,
    /// New domain name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,
    /// New search string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_string: Option<String>,
    /// New failure threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<i32>,
    /// New inversion flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverted: Option<bool>,
    /// New disabled flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// New health threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_threshold: Option<i32>,
    /// Replacement child checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_health_checks: Option<Vec<String>>,
    /// New SNI flag.
    #[serde(rename = "EnableSNI", skip_serializing_if = "Option::is_none")]
    pub enable_sni: Option<bool>,
    /// Replacement checker regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    /// Replacement alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_identifier: Option<AlarmIdentifier>,
    /// New insufficient-data status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insufficient_data_health_status: Option<InsufficientDataHealthStatus>,
    /// Members to reset to their defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_elements: Option<Vec<ResettableElementName>>,
}

impl UpdateHealthCheckInput {
    /// Sets `HealthCheckId`.
    #[must_use]
    pub fn with_health_check_id(mut self, id: impl Into<String>) -> Self {
        self.health_check_id = Some(id.into());
        self
    }

    /// Sets `HealthCheckVersion`.
    #[must_use]
    pub fn with_health_check_version(mut self, version: i64) -> Self {
        self.health_check_version = Some(version);
        self
    }

    /// Sets `IPAddress`.
    #[must_use]
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Sets `Port`.
    #[must_use]
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets `ResourcePath`.
    #[must_use]
    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = Some(path.into());
        self
    }

    /// Sets `FailureThreshold`.
    #[must_use]
    pub fn with_failure_threshold(mut self, threshold: i32) -> Self {
        self.failure_threshold = Some(threshold);
        self
    }

    /// Sets `Disabled`.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Sets `Regions`.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<String>) -> Self {
        self.regions = Some(regions);
        self
    }

    /// Sets `ResetElements`.
    #[must_use]
    pub fn with_reset_elements(mut self, elements: Vec<ResettableElementName>) -> Self {
        self.reset_elements = Some(elements);
        self
    }
}

/// Input of `DeleteHealthCheck`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteHealthCheckInput {
    /// Id of the check. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
}

impl DeleteHealthCheckInput {
    /// Sets `HealthCheckId`.
    #[must_use]
    pub fn with_health_check_id(mut self, id: impl Into<String>) -> Self {
        self.health_check_id = Some(id.into());
        self
    }
}

/// Input of `GetHealthCheckCount`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetHealthCheckCountInput {}
