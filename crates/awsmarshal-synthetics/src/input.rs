//! Synthetics operation inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{CanaryCodeInput, CanaryRunConfig, CanarySchedule, VpcConfig};

/// Input of `CreateCanary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCanaryInput {
    /// Canary name. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Script. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CanaryCodeInput>,
    /// Where run artifacts go. Required.
    #[serde(rename = "ArtifactS3Location", skip_serializing_if = "Option::is_none")]
    pub artifact_s3_location: Option<String>,
    /// Role the canary runs as. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    /// Run schedule. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<CanarySchedule>,
    /// Runtime settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_config: Option<CanaryRunConfig>,
    /// Days to keep successful runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_retention_period_in_days: Option<i32>,
    /// Days to keep failed runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_retention_period_in_days: Option<i32>,
    /// Runtime version, such as `syn-nodejs-puppeteer-9.0`. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    /// VPC placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateCanaryInput {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets `Code`.
    #[must_use]
    pub fn with_code(mut self, code: CanaryCodeInput) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets `ArtifactS3Location`.
    #[must_use]
    pub fn with_artifact_s3_location(mut self, location: impl Into<String>) -> Self {
        self.artifact_s3_location = Some(location.into());
        self
    }

    /// Sets `ExecutionRoleArn`.
    #[must_use]
    pub fn with_execution_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.execution_role_arn = Some(arn.into());
        self
    }

    /// Sets `Schedule`.
    #[must_use]
    pub fn with_schedule(mut self, schedule: CanarySchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Sets `RunConfig`.
    #[must_use]
    pub fn with_run_config(mut self, run_config: CanaryRunConfig) -> Self {
        self.run_config = Some(run_config);
        self
    }

    /// Sets `RuntimeVersion`.
    #[must_use]
    pub fn with_runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = Some(version.into());
        self
    }

    /// Sets `VpcConfig`.
    #[must_use]
    pub fn with_vpc_config(mut self, vpc: VpcConfig) -> Self {
        self.vpc_config = Some(vpc);
        self
    }

    /// Adds one tag.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Input of `GetCanary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCanaryInput {
    /// Canary name, bound to the URI path. Required.
    #[serde(skip)]
    pub name: Option<String>,
}

impl GetCanaryInput {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Input of `DescribeCanaries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCanariesInput {
    /// Token of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Restrict to these canaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

impl DescribeCanariesInput {
    /// Sets `NextToken`.
    #[must_use]
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    /// Sets `MaxResults`.
    #[must_use]
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Sets `Names`.
    #[must_use]
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }
}

/// Input of `StartCanary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartCanaryInput {
    /// Canary name, bound to the URI path. Required.
    #[serde(skip)]
    pub name: Option<String>,
}

impl StartCanaryInput {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Input of `StopCanary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopCanaryInput {
    /// Canary name, bound to the URI path. Required.
    #[serde(skip)]
    pub name: Option<String>,
}

impl StopCanaryInput {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Input of `DeleteCanary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCanaryInput {
    /// Canary name, bound to the URI path. Required.
    #[serde(skip)]
    pub name: Option<String>,
    /// Also delete the Lambda function and layers; sent as `deleteLambda`.
    #[serde(skip)]
    pub delete_lambda: Option<bool>,
}

impl DeleteCanaryInput {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets `DeleteLambda`.
    #[must_use]
    pub fn with_delete_lambda(mut self, delete: bool) -> Self {
        self.delete_lambda = Some(delete);
        self
    }
}
