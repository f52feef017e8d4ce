//! Synthetics operation outputs.

use serde::{Deserialize, Serialize};

use crate::types::Canary;

/// Output of `CreateCanary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCanaryOutput {
    /// The new canary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary: Option<Canary>,
}

/// Output of `GetCanary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCanaryOutput {
    /// The canary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary: Option<Canary>,
}

/// Output of `DescribeCanaries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCanariesOutput {
    /// One page of canaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canaries: Option<Vec<Canary>>,
    /// Token of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `StartCanary`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartCanaryOutput {}

/// Output of `StopCanary`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopCanaryOutput {}

/// Output of `DeleteCanary`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteCanaryOutput {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CreateCanaryInput, DescribeCanariesInput};
    use crate::types::tests::{json_round_trip, populated_canary, populated_run_config, populated_vpc};
    use crate::types::{CanaryCodeInput, CanarySchedule};

    #[test]
    fn test_should_round_trip_outputs() {
        assert_eq!(json_round_trip(&CreateCanaryOutput::default()), CreateCanaryOutput::default());
        assert_eq!(json_round_trip(&GetCanaryOutput::default()), GetCanaryOutput::default());
        assert_eq!(
            json_round_trip(&DescribeCanariesOutput::default()),
            DescribeCanariesOutput::default()
        );
        assert_eq!(json_round_trip(&StartCanaryOutput {}), StartCanaryOutput {});
        assert_eq!(json_round_trip(&StopCanaryOutput {}), StopCanaryOutput {});
        assert_eq!(json_round_trip(&DeleteCanaryOutput {}), DeleteCanaryOutput {});

        let created = CreateCanaryOutput {
            canary: Some(populated_canary()),
        };
        assert_eq!(json_round_trip(&created), created);

        let got = GetCanaryOutput {
            canary: Some(populated_canary()),
        };
        assert_eq!(json_round_trip(&got), got);

        let page = DescribeCanariesOutput {
            canaries: Some(vec![populated_canary(), Canary::default(), populated_canary()]),
            next_token: Some("page-2".to_owned()),
        };
        assert_eq!(json_round_trip(&page), page);
    }

    #[test]
    fn test_should_round_trip_body_inputs() {
        assert_eq!(json_round_trip(&CreateCanaryInput::default()), CreateCanaryInput::default());
        let create = CreateCanaryInput {
            success_retention_period_in_days: Some(7),
            failure_retention_period_in_days: Some(14),
            ..CreateCanaryInput::default()
        }
        .with_name("homepage")
        .with_code(
            CanaryCodeInput::default()
                .with_s3_location("scripts", "homepage.zip")
                .with_handler("index.handler"),
        )
        .with_artifact_s3_location("s3://artifacts/homepage")
        .with_execution_role_arn("arn:aws:iam::123456789012:role/canary")
        .with_schedule(CanarySchedule::expression("cron(0/5 * * * ? *)").with_duration_in_seconds(3600))
        .with_run_config(populated_run_config())
        .with_runtime_version("syn-nodejs-puppeteer-9.0")
        .with_vpc_config(populated_vpc())
        .with_tag("team", "web");
        assert_eq!(json_round_trip(&create), create);

        assert_eq!(
            json_round_trip(&DescribeCanariesInput::default()),
            DescribeCanariesInput::default()
        );
        let describe = DescribeCanariesInput::default()
            .with_next_token("page-2")
            .with_max_results(20)
            .with_names(vec!["homepage".to_owned(), "checkout".to_owned()]);
        assert_eq!(json_round_trip(&describe), describe);
    }
}
