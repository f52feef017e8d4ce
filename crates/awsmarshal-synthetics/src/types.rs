//! Shared Synthetics canary shapes.

use std::collections::HashMap;

use awsmarshal_core::{Blob, Timestamp, wire_enum};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Lifecycle state of a canary.
    pub enum CanaryState {
        /// Being created.
        Creating => "CREATING",
        /// Created, not started.
        Ready => "READY",
        /// Starting.
        Starting => "STARTING",
        /// Running on its schedule.
        Running => "RUNNING",
        /// Being updated.
        Updating => "UPDATING",
        /// Stopping.
        Stopping => "STOPPING",
        /// Stopped.
        Stopped => "STOPPED",
        /// Failed; see the state reason.
        Error => "ERROR",
        /// Being deleted.
        Deleting => "DELETING",
    }
}

wire_enum! {
    /// Machine-readable reason for the current state.
    pub enum CanaryStateReasonCode {
        /// The execution role lacks permissions.
        InvalidPermissions => "INVALID_PERMISSIONS",
        /// Creation is queued.
        CreatePending => "CREATE_PENDING",
        /// Creation is running.
        CreateInProgress => "CREATE_IN_PROGRESS",
        /// Creation failed.
        CreateFailed => "CREATE_FAILED",
        /// Update is queued.
        UpdatePending => "UPDATE_PENDING",
        /// Update is running.
        UpdateInProgress => "UPDATE_IN_PROGRESS",
        /// Update finished.
        UpdateComplete => "UPDATE_COMPLETE",
        /// Update was rolled back.
        RollbackComplete => "ROLLBACK_COMPLETE",
        /// Rollback failed.
        RollbackFailed => "ROLLBACK_FAILED",
        /// Deletion is running.
        DeleteInProgress => "DELETE_IN_PROGRESS",
        /// Deletion failed.
        DeleteFailed => "DELETE_FAILED",
        /// Synchronous deletion is running.
        SyncDeleteInProgress => "SYNC_DELETE_IN_PROGRESS",
    }
}

/// Script of a canary, inline or in S3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanaryCodeInput {
    /// Bucket holding the script archive.
    #[serde(rename = "S3Bucket", skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
    /// Key of the script archive.
    #[serde(rename = "S3Key", skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
    /// Object version of the script archive.
    #[serde(rename = "S3Version", skip_serializing_if = "Option::is_none")]
    pub s3_version: Option<String>,
    /// Inline script archive.
    #[serde(rename = "ZipFile", skip_serializing_if = "Option::is_none")]
    pub zip_file: Option<Blob>,
    /// Entry point, `file.function`. Required.
    #[serde(rename = "Handler", skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

impl CanaryCodeInput {
    /// Points at an archive in S3.
    #[must_use]
    pub fn with_s3_location(mut self, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        self.s3_bucket = Some(bucket.into());
        self.s3_key = Some(key.into());
        self
    }

    /// Uploads the archive inline.
    #[must_use]
    pub fn with_zip_file(mut self, zip: impl Into<Blob>) -> Self {
        self.zip_file = Some(zip.into());
        self
    }

    /// Sets `Handler`.
    #[must_use]
    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }
}

/// Script location as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanaryCodeOutput {
    /// Lambda layer holding the script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location_arn: Option<String>,
    /// Entry point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

/// How often a canary runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanarySchedule {
    /// `rate(...)` or `cron(...)`. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// How long to keep running; `0` runs until stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<i64>,
}

impl CanarySchedule {
    /// A schedule with only `Expression` set.
    #[must_use]
    pub fn expression(expression: impl Into<String>) -> Self {
        Self {
            expression: Some(expression.into()),
            duration_in_seconds: None,
        }
    }

    /// Sets `DurationInSeconds`.
    #[must_use]
    pub fn with_duration_in_seconds(mut self, seconds: i64) -> Self {
        self.duration_in_seconds = Some(seconds);
        self
    }
}

/// Runtime settings of each run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanaryRunConfig {
    /// Run timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_in_seconds: Option<i32>,
    /// Memory available to a run.
    #[serde(rename = "MemoryInMB", skip_serializing_if = "Option::is_none")]
    pub memory_in_mb: Option<i32>,
    /// Whether X-Ray tracing is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_tracing: Option<bool>,
    /// Environment of a run. Only accepted on input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<HashMap<String, String>>,
}

impl CanaryRunConfig {
    /// Sets `TimeoutInSeconds`.
    #[must_use]
    pub fn with_timeout_in_seconds(mut self, seconds: i32) -> Self {
        self.timeout_in_seconds = Some(seconds);
        self
    }

    /// Sets `MemoryInMB`.
    #[must_use]
    pub fn with_memory_in_mb(mut self, mb: i32) -> Self {
        self.memory_in_mb = Some(mb);
        self
    }

    /// Sets `ActiveTracing`.
    #[must_use]
    pub fn with_active_tracing(mut self, active: bool) -> Self {
        self.active_tracing = Some(active);
        self
    }

    /// Adds one environment variable.
    #[must_use]
    pub fn with_environment_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment_variables
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// VPC placement of a canary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcConfig {
    /// VPC id. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// Subnets to run in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    /// Security groups to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
}

/// State of a canary and why it is in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanaryStatus {
    /// Current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CanaryState>,
    /// Human-readable reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
    /// Machine-readable reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason_code: Option<CanaryStateReasonCode>,
}

/// Lifecycle timestamps of a canary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanaryTimeline {
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Last modification time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,
    /// Last start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_started: Option<Timestamp>,
    /// Last stop time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_stopped: Option<Timestamp>,
}

/// A canary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Canary {
    /// Canary id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Canary name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Script location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CanaryCodeOutput>,
    /// Role the canary runs as.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    /// Run schedule.
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
    /// State.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CanaryStatus>,
    /// Lifecycle timestamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<CanaryTimeline>,
    /// Where run artifacts are stored.
    #[serde(rename = "ArtifactS3Location", skip_serializing_if = "Option::is_none")]
    pub artifact_s3_location: Option<String>,
    /// Lambda function running the canary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_arn: Option<String>,
    /// Runtime version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    /// VPC placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}
