//! Shared Route 53 health-check shapes.

use awsmarshal_core::wire_enum;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// How Route 53 decides whether an endpoint is healthy.
    pub enum HealthCheckType {
        /// HTTP request, healthy on a 2xx/3xx status.
        Http => "HTTP",
        /// HTTPS request, healthy on a 2xx/3xx status.
        Https => "HTTPS",
        /// HTTP request whose body must contain `SearchString`.
        HttpStrMatch => "HTTP_STR_MATCH",
        /// HTTPS request whose body must contain `SearchString`.
        HttpsStrMatch => "HTTPS_STR_MATCH",
        /// TCP connection.
        Tcp => "TCP",
        /// Combines the status of child health checks.
        Calculated => "CALCULATED",
        /// Follows a CloudWatch alarm.
        CloudwatchMetric => "CLOUDWATCH_METRIC",
        /// Follows a Route 53 ARC routing control.
        RecoveryControl => "RECOVERY_CONTROL",
    }
}

wire_enum! {
    /// Status reported while a CloudWatch alarm has insufficient data.
    pub enum InsufficientDataHealthStatus {
        /// Report healthy.
        Healthy => "Healthy",
        /// Report unhealthy.
        Unhealthy => "Unhealthy",
        /// Keep the last known status.
        LastKnownStatus => "LastKnownStatus",
    }
}

wire_enum! {
    /// Health-check settings that `UpdateHealthCheck` can reset to defaults.
    pub enum ResettableElementName {
        /// `FullyQualifiedDomainName`.
        FullyQualifiedDomainName => "FullyQualifiedDomainName",
        /// `Regions`.
        Regions => "Regions",
        /// `ResourcePath`.
        ResourcePath => "ResourcePath",
        /// `ChildHealthChecks`.
        ChildHealthChecks => "ChildHealthChecks",
    }
}

/// CloudWatch alarm a `CLOUDWATCH_METRIC` health check follows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmIdentifier {
    /// Region the alarm lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Alarm name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AlarmIdentifier {
    /// Sets `Region`.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Settings of a health check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthCheckConfig {
    /// IPv4 or IPv6 address of the endpoint.
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Port of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Check type. Cannot be changed after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<HealthCheckType>,
    /// Path requested by HTTP(S) checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_path: Option<String>,
    /// Domain name of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,
    /// String a `*_STR_MATCH` check looks for in the response body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_string: Option<String>,
    /// Seconds between checks (10 or 30).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_interval: Option<i32>,
    /// Consecutive results needed to change status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<i32>,
    /// Whether to measure latency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_latency: Option<bool>,
    /// Inverts the reported status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverted: Option<bool>,
    /// Stops checking and always reports healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Healthy children a `CALCULATED` check needs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_threshold: Option<i32>,
    /// Child health check ids of a `CALCULATED` check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_health_checks: Option<Vec<String>>,
    /// Whether to send the host name during the TLS handshake.
    #[serde(rename = "EnableSNI", skip_serializing_if = "Option::is_none")]
    pub enable_sni: Option<bool>,
    /// Checker regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    /// Alarm followed by a `CLOUDWATCH_METRIC` check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_identifier: Option<AlarmIdentifier>,
    /// Status while the alarm has insufficient data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insufficient_data_health_status: Option<InsufficientDataHealthStatus>,
}

impl HealthCheckConfig {
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

    /// Sets `Type`.
    #[must_use]
    pub fn with_type(mut self, r#type: HealthCheckType) -> Self {
        self.r#type = Some(r#type);
        self
    }

    /// Sets `ResourcePath`.
    #[must_use]
    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = Some(path.into());
        self
    }

    /// Sets `FullyQualifiedDomainName`.
    #[must_use]
    pub fn with_fully_qualified_domain_name(mut self, fqdn: impl Into<String>) -> Self {
        self.fully_qualified_domain_name = Some(fqdn.into());
        self
    }

    /// Sets `SearchString`.
    #[must_use]
    pub fn with_search_string(mut self, search: impl Into<String>) -> Self {
        self.search_string = Some(search.into());
        self
    }

    /// Sets `RequestInterval`.
    #[must_use]
    pub fn with_request_interval(mut self, seconds: i32) -> Self {
        self.request_interval = Some(seconds);
        self
    }

    /// Sets `FailureThreshold`.
    #[must_use]
    pub fn with_failure_threshold(mut self, threshold: i32) -> Self {
        self.failure_threshold = Some(threshold);
        self
    }

    /// Sets `MeasureLatency`.
    #[must_use]
    pub fn with_measure_latency(mut self, measure: bool) -> Self {
        self.measure_latency = Some(measure);
        self
    }

    /// Sets `Inverted`.
    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = Some(inverted);
        self
    }

    /// Sets `Disabled`.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Sets `HealthThreshold`.
    #[must_use]
    pub fn with_health_threshold(mut self, threshold: i32) -> Self {
        self.health_threshold = Some(threshold);
        self
    }

    /// Sets `ChildHealthChecks`.
    #[must_use]
    pub fn with_child_health_checks(mut self, ids: Vec<String>) -> Self {
        self.child_health_checks = Some(ids);
        self
    }

    /// Sets `EnableSNI`.
    #[must_use]
    pub fn with_enable_sni(mut self, enable: bool) -> Self {
        self.enable_sni = Some(enable);
        self
    }

    /// Sets `Regions`.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<String>) -> Self {
        self.regions = Some(regions);
        self
    }

    /// Sets `AlarmIdentifier`.
    #[must_use]
    pub fn with_alarm_identifier(mut self, alarm: AlarmIdentifier) -> Self {
        self.alarm_identifier = Some(alarm);
        self
    }

    /// Sets `InsufficientDataHealthStatus`.
    #[must_use]
    pub fn with_insufficient_data_health_status(
        mut self,
        status: InsufficientDataHealthStatus,
    ) -> Self {
        self.insufficient_data_health_status = Some(status);
        self
    }
}

/// A health check as Route 53 reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthCheck {
    /// Health check id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Idempotency token supplied at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_reference: Option<String>,
    /// Current settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_config: Option<HealthCheckConfig>,
    /// Version, incremented by every update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_version: Option<i64>,
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fmt::Debug;

    use awsmarshal_query::{ListStyle, to_params};
    use serde::de::DeserializeOwned;

    use super::*;

    /// Writes `model` as XML and reads it back.
    pub(crate) fn xml_round_trip<T>(model: &T, root: &str) -> T
    where
        T: Serialize + DeserializeOwned + PartialEq + Debug,
    {
        let xml = awsmarshal_xml::to_xml(model, root, None).unwrap();
        awsmarshal_xml::from_xml(&xml).unwrap()
    }

    pub(crate) fn populated_health_check() -> HealthCheck {
        HealthCheck {
            id: Some("abcdef11-2222-3333-4444-555555fedcba".to_owned()),
            caller_reference: Some("example.com 192.0.2.17".to_owned()),
            health_check_config: Some(
                HealthCheckConfig::default()
                    .with_ip_address("192.0.2.17")
                    .with_port(443)
                    .with_type(HealthCheckType::Unknown("HTTPS_FUTURE".to_owned()))
                    .with_resource_path("/status?deep=1&full=true")
                    .with_fully_qualified_domain_name("www.example.com")
                    .with_search_string("<ok> & \"ready\"")
                    .with_request_interval(10)
                    .with_failure_threshold(3)
                    .with_measure_latency(true)
                    .with_inverted(false)
                    .with_disabled(false)
                    .with_health_threshold(2)
                    .with_child_health_checks(vec![])
                    .with_enable_sni(true)
                    .with_regions(vec![
                        "us-east-1".to_owned(),
                        "eu-west-1".to_owned(),
                        "ap-southeast-2".to_owned(),
                    ])
                    .with_alarm_identifier(
                        AlarmIdentifier::default()
                            .with_region("us-east-1")
                            .with_name("high-latency"),
                    )
                    .with_insufficient_data_health_status(
                        InsufficientDataHealthStatus::LastKnownStatus,
                    ),
            ),
            health_check_version: Some(7),
        }
    }

    #[test]
    fn test_should_round_trip_unset_models() {
        assert_eq!(xml_round_trip(&AlarmIdentifier::default(), "AlarmIdentifier"), AlarmIdentifier::default());
        assert_eq!(
            xml_round_trip(&HealthCheckConfig::default(), "HealthCheckConfig"),
            HealthCheckConfig::default()
        );
        assert_eq!(xml_round_trip(&HealthCheck::default(), "HealthCheck"), HealthCheck::default());
    }

    #[test]
    fn test_should_round_trip_populated_models() {
        let check = populated_health_check();
        assert_eq!(xml_round_trip(&check, "HealthCheck"), check);

        let config = check.health_check_config.clone().unwrap();
        assert_eq!(xml_round_trip(&config, "HealthCheckConfig"), config);

        let alarm = config.alarm_identifier.unwrap();
        assert_eq!(xml_round_trip(&alarm, "AlarmIdentifier"), alarm);
    }

    #[test]
    fn test_should_use_acronym_wire_names() {
        let config = HealthCheckConfig::default()
            .with_ip_address("192.0.2.10")
            .with_enable_sni(true)
            .with_type(HealthCheckType::Https);
        let params = to_params(&config, "", ListStyle::Member).unwrap();
        assert_eq!(
            params,
            vec![
                ("IPAddress".to_owned(), "192.0.2.10".to_owned()),
                ("Type".to_owned(), "HTTPS".to_owned()),
                ("EnableSNI".to_owned(), "true".to_owned()),
            ]
        );
    }

    #[test]
    fn test_should_read_health_check_from_xml() {
        let xml = r"<HealthCheck>
            <Id>abcdef11-2222-3333-4444-555555fedcba</Id>
            <CallerReference>example.com 192.0.2.17</CallerReference>
            <HealthCheckConfig>
              <IPAddress>192.0.2.17</IPAddress>
              <Port>80</Port>
              <Type>HTTP_STR_MATCH</Type>
              <ResourcePath>/docs/route-53-health-check.html</ResourcePath>
              <SearchString>health</SearchString>
              <RequestInterval>30</RequestInterval>
              <FailureThreshold>3</FailureThreshold>
              <MeasureLatency>false</MeasureLatency>
              <Regions><Region>us-east-1</Region><Region>eu-west-1</Region></Regions>
            </HealthCheckConfig>
            <HealthCheckVersion>2</HealthCheckVersion>
            <CloudWatchAlarmConfiguration><Period>60</Period></CloudWatchAlarmConfiguration>
          </HealthCheck>";
        let hc: HealthCheck = awsmarshal_xml::from_xml(xml.as_bytes()).unwrap();
        let config = hc.health_check_config.unwrap();
        assert_eq!(config.r#type, Some(HealthCheckType::HttpStrMatch));
        assert_eq!(config.port, Some(80));
        assert_eq!(config.measure_latency, Some(false));
        assert_eq!(
            config.regions.as_deref(),
            Some(&["us-east-1".to_owned(), "eu-west-1".to_owned()][..])
        );
        assert!(config.child_health_checks.is_none());
        assert_eq!(hc.health_check_version, Some(2));
    }
}
